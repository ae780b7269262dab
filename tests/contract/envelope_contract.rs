//! Envelope contract shared by every record type: success bodies decode
//! field-for-field, failure codes surface the vendor message, and list
//! length always follows the `list` array.

use hpool_core::{
    decode_list, decode_object, Assets, HpoolError, Miner, MiningIncome, Plot, Pool,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

fn success(data: Value) -> String {
    json!({"code": 200, "message": "", "data": data}).to_string()
}

fn failure(code: i64, message: &str) -> String {
    json!({"code": code, "message": message, "data": null}).to_string()
}

fn assert_api_error<T: std::fmt::Debug>(result: Result<T, HpoolError>, expected: &str) {
    let error = result.expect_err("non-200 code must fail");
    assert_eq!(error.api_message(), Some(expected));
}

fn decoded_len<T: DeserializeOwned>(list: Value, total: i64) -> usize {
    let body = success(json!({"total": total, "list": list}));
    decode_list::<T>(&body).expect("list should decode").len()
}

#[test]
fn string_and_number_encodings_decode_to_equal_records() {
    let as_strings = success(json!({
        "balance": "12.5",
        "cooperation_amount": "1",
        "deposit_amount": "0.5",
        "freeze_balance": "0",
        "name": "CHIA",
        "type": "chia",
        "total_assets": "14",
        "withdraw_amount": "0.25"
    }));
    let as_numbers = success(json!({
        "balance": 12.5,
        "cooperation_amount": 1,
        "deposit_amount": 0.5,
        "freeze_balance": 0,
        "name": "CHIA",
        "type": "chia",
        "total_assets": 14,
        "withdraw_amount": 0.25
    }));

    let left: Assets = decode_object(&as_strings).expect("string form");
    let right: Assets = decode_object(&as_numbers).expect("number form");
    assert_eq!(left, right);
    assert_eq!(left.balance, 12.5);
}

#[test]
fn direct_object_fields_match_input() {
    let body = success(json!({
        "api_key": "key",
        "block_reward": "2.5",
        "block_time": 30,
        "capacity": 2048,
        "coin": "chia",
        "deposit_mortgage_balance": "1",
        "deposit_mortgage_effective_balance": "0.75",
        "deposit_mortgage_free_balance": "0.25",
        "deposit_rate": "0.5",
        "fee": 0.01,
        "loan_mortgage_balance": "0",
        "mortgage": "3",
        "name": "HPool-Chia",
        "offline": 2,
        "online": 8,
        "payment_time": "12:00",
        "point_deposit_balance": "4.5",
        "pool_address": "xch1abc",
        "pool_income": "99.5",
        "pool_type": "eco",
        "previous_income_pb": "0.0025",
        "theory_mortgage_balance": "5",
        "type": "chia",
        "undistributed_income": "0.125"
    }));

    let pool: Pool = decode_object(&body).expect("pool should decode");

    let expected = Pool {
        api_key: String::from("key"),
        block_reward: 2.5,
        block_time: 30,
        capacity: 2048,
        coin: String::from("chia"),
        deposit_mortgage_balance: 1.0,
        deposit_mortgage_effective_balance: 0.75,
        deposit_mortgage_free_balance: 0.25,
        deposit_rate: 0.5,
        fee: 0.01,
        loan_mortgage_balance: 0.0,
        mortgage: 3.0,
        name: String::from("HPool-Chia"),
        offline: 2,
        online: 8,
        payment_time: String::from("12:00"),
        point_deposit_balance: 4.5,
        pool_address: String::from("xch1abc"),
        pool_income: 99.5,
        pool_type: String::from("eco"),
        previous_income_pb: 0.0025,
        theory_mortgage_balance: 5.0,
        kind: String::from("chia"),
        undistributed_income: 0.125,
    };
    assert_eq!(pool, expected);
}

#[test]
fn list_length_follows_list_not_total() {
    let miners = json!([{"miner_name": "a"}, {"miner_name": "b"}, {"miner_name": "c"}]);
    assert_eq!(decoded_len::<Miner>(miners.clone(), 0), 3);
    assert_eq!(decoded_len::<Miner>(miners, 1000), 3);
    assert_eq!(decoded_len::<Plot>(json!([]), 5), 0);
    assert_eq!(decoded_len::<MiningIncome>(json!([{"amount": "1"}]), -1), 1);
}

#[test]
fn null_list_is_empty_for_every_record_type() {
    assert_eq!(decoded_len::<Pool>(Value::Null, 0), 0);
    assert_eq!(decoded_len::<Miner>(Value::Null, 3), 0);
    assert_eq!(decoded_len::<Plot>(Value::Null, 0), 0);
    assert_eq!(decoded_len::<MiningIncome>(Value::Null, 0), 0);
    assert_eq!(decoded_len::<Assets>(Value::Null, 0), 0);
}

#[test]
fn null_fields_read_the_same_as_missing_fields() {
    let with_nulls = success(json!({
        "miner_name": null,
        "id": null,
        "capacity": null,
        "online": null,
        "update_time": null
    }));
    let empty = success(json!({}));

    let from_nulls: Miner = decode_object(&with_nulls).expect("nulls should decode");
    let from_empty: Miner = decode_object(&empty).expect("empty should decode");
    assert_eq!(from_nulls, from_empty);
    assert_eq!(from_nulls, Miner::default());
}

#[test]
fn failure_codes_surface_vendor_message_for_every_record_type() {
    let body = failure(500, "invalid token");
    assert_api_error(decode_list::<Pool>(&body), "invalid token");
    assert_api_error(decode_object::<Pool>(&body), "invalid token");
    assert_api_error(decode_list::<Miner>(&body), "invalid token");
    assert_api_error(decode_list::<Plot>(&body), "invalid token");
    assert_api_error(decode_list::<MiningIncome>(&body), "invalid token");
    assert_api_error(decode_list::<Assets>(&body), "invalid token");
}

#[test]
fn any_code_other_than_200_is_a_failure() {
    for code in [0, 201, 400, 401, 10_001] {
        let body = failure(code, "nope");
        let error = decode_list::<Miner>(&body).expect_err("must fail");
        assert!(matches!(error, HpoolError::Api { code: c, .. } if c == code));
    }
}

#[test]
fn failure_without_message_yields_empty_message() {
    let body = json!({"code": 403}).to_string();
    assert_api_error(decode_list::<Miner>(&body), "");
}
