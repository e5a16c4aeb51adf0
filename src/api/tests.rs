//! Tests for the endpoint groups
//!
//! Each test stands up its own mock server and drives a real client against
//! it, so the full pipeline runs: header construction, payload
//! serialization, decoding, status handling, and field extraction.

use crate::{Config, Currency, TransactionType, WalletsAfrica, WalletsError};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

#[tokio::test]
async fn test_check_balance_success() {
    let mut server = Server::new_async().await;
    // Exact body match: the payload carries the secret key and nothing else.
    let _mock = server
        .mock("POST", "/self/balance")
        .match_header("authorization", "Bearer uvjqzm5xl6bw")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "Currency": "NGN",
            "SecretKey": "hfucj5jatq8h"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {"ResponseCode": "200", "Message": "Balance Retrieved successfully"},
                "Data": {"WalletBalance": 880.16, "WalletCurrency": "NGN"}
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let balance = api.account.check_balance(Currency::Ngn).await.unwrap();
    assert_eq!(balance.wallet_balance, 880.16);
    assert_eq!(balance.wallet_currency, "NGN");
}

#[tokio::test]
async fn test_check_balance_missing_field() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/self/balance")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {"ResponseCode": "200", "Message": "Balance Retrieved successfully"},
                "Data": {"WalletCurrency": "NGN"}
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api.account.check_balance(Currency::Ngn).await.unwrap_err();
    assert!(matches!(err, WalletsError::MissingField { .. }));
    assert!(err.to_string().contains("WalletBalance"));
}

#[tokio::test]
async fn test_success_with_failing_envelope_code_is_not_an_error() {
    let mut server = Server::new_async().await;
    // HTTP 200 wins over whatever code the envelope carries.
    let _mock = server
        .mock("POST", "/self/balance")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {"ResponseCode": "XX1", "Message": "Gateway warning"},
                "Data": {"WalletBalance": 880.16, "WalletCurrency": "NGN"}
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let balance = api.account.check_balance(Currency::Ngn).await.unwrap();
    assert_eq!(balance.wallet_balance, 880.16);
}

#[tokio::test]
async fn test_api_failure_extracts_envelope() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/self/balance")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {"ResponseCode": "403", "Message": "Invalid key"},
                "Data": null
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api.account.check_balance(Currency::Ngn).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Request Failed - Error Code: 403 | Message: Invalid key"
    );
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error() {
    let mut server = Server::new_async().await;
    // Decode runs before the status check, so a non-JSON error page is a
    // decode failure rather than a request failure.
    let _mock = server
        .mock("POST", "/self/balance")
        .with_status(502)
        .with_body("Bad Gateway")
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api.account.check_balance(Currency::Ngn).await.unwrap_err();
    assert!(matches!(err, WalletsError::Decode(_)));
}

#[tokio::test]
async fn test_transactions_success_page() {
    let mut server = Server::new_async().await;
    // Exact body match: DateFrom is included, DateTo is omitted entirely.
    let _mock = server
        .mock("POST", "/self/transactions")
        .match_body(Matcher::Json(json!({
            "Currency": "NGN",
            "TransactionType": 3,
            "Take": 1,
            "Skip": 0,
            "SecretKey": "hfucj5jatq8h",
            "DateFrom": "2020-01-23"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {
                    "ResponseCode": "200",
                    "Message": "Transactions Retrieved successfully"
                },
                "Data": {
                    "Transactions": [
                        {
                            "Amount": 1.00,
                            "Currency": "NGN",
                            "Category": "Wallet Transfer",
                            "Narration": "Sent money to Eduvie Agada",
                            "DateTransacted": "7/18/2020 6:28:59 PM",
                            "PreviousBalance": 7806789.16,
                            "NewBalance": 7806790.16,
                            "Type": "Credit"
                        },
                        {
                            "Amount": 4250.00,
                            "Currency": "NGN",
                            "Category": "Dollar Card Withdrawal",
                            "Narration": "Dollar Card Withdrawal at exchange rate: 425",
                            "DateTransacted": "7/18/2020 11:38:27 AM",
                            "PreviousBalance": 7803412.78,
                            "NewBalance": 7807662.78,
                            "Type": "Credit"
                        }
                    ]
                }
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let transactions = api
        .account
        .transactions(
            Currency::Ngn,
            TransactionType::All,
            1,
            0,
            Some("2020-01-23"),
            None,
        )
        .await
        .unwrap();

    // Order is exactly as the server returned it.
    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].amount, 1.0);
    assert_eq!(transactions[0].transaction_type, "Credit");
    assert_eq!(transactions[0].narration, "Sent money to Eduvie Agada");
    assert_eq!(transactions[1].amount, 4250.0);
    assert_eq!(transactions[1].category, "Dollar Card Withdrawal");
}

#[tokio::test]
async fn test_transactions_take_validation_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/self/transactions")
        .expect(0)
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api
        .account
        .transactions(Currency::Ngn, TransactionType::All, 0, 0, None, None)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "take cannot be less than 1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transactions_date_validation_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/self/transactions")
        .expect(0)
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    // Month and day swapped.
    let err = api
        .account
        .transactions(
            Currency::Ngn,
            TransactionType::All,
            1,
            0,
            Some("2020-23-10"),
            None,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WalletsError::Validation { .. }));
    assert!(err.to_string().contains("date_from"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_wallets_null_handling() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/self/users")
        .match_body(Matcher::Json(json!({"SecretKey": "hfucj5jatq8h"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {
                    "ResponseCode": "200",
                    "Message": "Transactions Retrieved successfully"
                },
                "Data": [
                    {
                        "Username": null,
                        "AccountNumber": "1023236949",
                        "BVN": "22231485915",
                        "City": null,
                        "Country": null,
                        "DateCreated": "2020-01-15T11:51:29.207",
                        "DateOfBirth": "01-JAN-1990",
                        "Email": "okiemuteodekuma@gmail.com",
                        "FirstName": "Okiemute",
                        "LastName": "Odekuma",
                        "PhoneNumber": "2348057998539",
                        "AvailableBalance": 3396.00
                    },
                    {
                        "Username": "jCobhams",
                        "AccountNumber": null,
                        "BVN": null,
                        "City": null,
                        "Country": null,
                        "DateCreated": "2020-01-15T15:00:30.867",
                        "DateOfBirth": null,
                        "Email": "brucewayne@wayneenterprises.com",
                        "FirstName": "Bruce",
                        "LastName": "Wayne",
                        "PhoneNumber": "10706391833",
                        "AvailableBalance": 0.00
                    }
                ]
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let wallets = api.account.get_wallets().await.unwrap();
    assert_eq!(wallets.len(), 2);

    assert_eq!(wallets[0].last_name, "Odekuma");
    assert_eq!(wallets[0].bvn, "22231485915");
    assert_eq!(wallets[0].username, "");
    assert_eq!(wallets[0].city, "");
    assert_eq!(wallets[0].account_number, "1023236949");
    assert_eq!(wallets[0].date_of_birth, "01-JAN-1990");
    assert_eq!(wallets[0].available_balance, 3396.0);

    assert_eq!(wallets[1].username, "jCobhams");
    assert_eq!(wallets[1].account_number, "");
    assert_eq!(wallets[1].bvn, "");
    assert_eq!(wallets[1].date_of_birth, "");
    assert_eq!(wallets[1].available_balance, 0.0);
}

#[tokio::test]
async fn test_generate_wallet() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/wallet/generate")
        .match_body(Matcher::Json(json!({
            "SecretKey": "hfucj5jatq8h",
            "Currency": "NGN",
            "FirstName": "Bruce",
            "LastName": "Wayne",
            "Email": "brucewayne@wayneenterprises.com",
            "DateOfBirth": "1990-04-17"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {"ResponseCode": "200", "Message": "Wallet created successfully"},
                "Data": {
                    "FirstName": "Bruce",
                    "LastName": "Wayne",
                    "Email": "brucewayne@wayneenterprises.com",
                    "PhoneNumber": "2348057990000",
                    "BVN": null,
                    "Password": "X8p2rQ",
                    "DateOfBirth": "1990-04-17",
                    "DateSignedup": "2020-01-23T09:12:44.1",
                    "AccountNo": "9977123456",
                    "Bank": "Providus Bank",
                    "AccountName": "Bruce Wayne",
                    "AvailableBalance": 0.00
                }
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let wallet = api
        .wallets
        .generate(
            Currency::Ngn,
            "Bruce",
            "Wayne",
            "brucewayne@wayneenterprises.com",
            Some("1990-04-17"),
        )
        .await
        .unwrap();

    assert_eq!(wallet.account_number, "9977123456");
    assert_eq!(wallet.bank, "Providus Bank");
    assert_eq!(wallet.password, "X8p2rQ");
    assert_eq!(wallet.date_signedup, "2020-01-23T09:12:44.1");
    assert_eq!(wallet.bvn, "");
    assert_eq!(wallet.available_balance, 0.0);
}

#[tokio::test]
async fn test_generate_wallet_rejects_bad_date() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/wallet/generate").expect(0).create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api
        .wallets
        .generate(
            Currency::Ngn,
            "Bruce",
            "Wayne",
            "brucewayne@wayneenterprises.com",
            Some("17-04-1990"),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, WalletsError::Validation { .. }));
    assert!(err.to_string().contains("date_of_birth"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_credit_wallet() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/wallet/credit")
        .match_body(Matcher::Json(json!({
            "TransactionReference": "ref-20200123-001",
            "Amount": 1000.0,
            "PhoneNumber": "08057998539",
            "SecretKey": "hfucj5jatq8h"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Response": {"ResponseCode": "200", "Message": "Wallet credited successfully"},
                "Data": {
                    "AmountCredited": 1000.00,
                    "RecipientWalletBalance": 1860.25,
                    "SenderWalletBalance": 4860.75
                }
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let result = api
        .wallets
        .credit(1000.0, "ref-20200123-001", "08057998539")
        .await
        .unwrap();
    assert_eq!(result.amount_credited, 1000.0);
    assert_eq!(result.recipient_wallet_balance, 1860.25);
    assert_eq!(result.sender_wallet_balance, 4860.75);
}

#[tokio::test]
async fn test_get_banks_bare_array() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/transfer/banks/all")
        .match_header("authorization", "Bearer uvjqzm5xl6bw")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {
                    "BankCode": "044",
                    "BankName": "Access Bank Nigeria",
                    "BankSortCode": "000014",
                    "PaymentGateway": null
                },
                {
                    "BankCode": "035A",
                    "BankName": "Alat By Wema",
                    "BankSortCode": "000017",
                    "PaymentGateway": null
                }
            ])
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let banks = api.payouts.get_banks().await.unwrap();
    assert_eq!(banks.len(), 2);
    assert_eq!(banks[0].bank_code, "044");
    assert_eq!(banks[1].bank_sort_code, "000017");
}

#[tokio::test]
async fn test_get_banks_failure_uses_status_line() {
    let mut server = Server::new_async().await;
    // No envelope to read in an array body, so the status line stands in.
    let _mock = server
        .mock("POST", "/transfer/banks/all")
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(json!([]).to_string())
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api.payouts.get_banks().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Request Failed - Error Code: 403 | Message: Forbidden"
    );
}

#[tokio::test]
async fn test_get_banks_rejects_non_array_success() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/transfer/banks/all")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"Banks": []}).to_string())
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api.payouts.get_banks().await.unwrap_err();
    assert!(matches!(err, WalletsError::MissingField { .. }));
}

#[tokio::test]
async fn test_bank_details_null_session() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/transfer/bank/details")
        .match_body(Matcher::Json(json!({
            "SecretKey": "hfucj5jatq8h",
            "TransactionReference": "2578615312"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "Bank": "Gtbank Plc",
                "AccountNumber": "0200556677",
                "DateTransferred": "1/15/2020 1:45:31 PM",
                "Amount": 10.00,
                "RecipientName": "JOHN DOE",
                "SessionId": null,
                "ResponseCode": "200",
                "Message": null
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let details = api.payouts.bank_details("2578615312").await.unwrap();
    assert_eq!(details.bank, "Gtbank Plc");
    assert_eq!(details.account_number, "0200556677");
    assert_eq!(details.amount, 10.0);
    assert_eq!(details.recipient_name, "JOHN DOE");
    assert_eq!(details.response_code, "200");
    assert_eq!(details.session_id, "");
    assert_eq!(details.message, "");
}

#[tokio::test]
async fn test_resolve_bvn() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/account/resolvebvn")
        .match_body(Matcher::Json(json!({
            "BVN": "22231485915",
            "SecretKey": "hfucj5jatq8h"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "FirstName": "JOHN",
                "LastName": "DOE",
                "MiddleName": null,
                "Email": "test@example.com",
                "PhoneNumber": "0706657415",
                "BVN": "22231485915",
                "DateOfBirth": "11-04-1992",
                "EnrollmentBank": "Access Bank",
                "EnrollmentBranch": "Heaven",
                "Gender": "Male",
                "LevelOfAccount": null,
                "LgaOfOrigin": null,
                "LgaOfResidence": null,
                "MaritalStatus": "Married",
                "NameOnCard": null,
                "Nationality": null,
                "StateOfOrigin": null,
                "StateOfResidence": null,
                "Title": "Chief",
                "WatchListed": null,
                "Picture": null,
                "ResponseCode": "200",
                "Message": "Successful"
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let details = api.identity.resolve_bvn("22231485915").await.unwrap();
    assert_eq!(details.first_name, "JOHN");
    assert_eq!(details.last_name, "DOE");
    assert_eq!(details.middle_name, "");
    assert_eq!(details.enrollment_bank, "Access Bank");
    assert_eq!(details.title, "Chief");
    assert_eq!(details.watch_listed, "");
}

#[tokio::test]
async fn test_resolve_bvn_details_alias() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/account/resolvebvn")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "FirstName": "JOHN",
                "LastName": "DOE",
                "Email": "test@example.com",
                "PhoneNumber": "0706657415",
                "BVN": "22231485915",
                "DateOfBirth": "11-04-1992"
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let details = api
        .identity
        .resolve_bvn_details("22231485915")
        .await
        .unwrap();
    assert_eq!(details.first_name, "JOHN");
    assert_eq!(details.last_name, "DOE");
    assert_eq!(details.gender, "");
}

#[tokio::test]
async fn test_resolve_bvn_requires_a_number() {
    let mut server = Server::new_async().await;
    let mock = server.mock("POST", "/account/resolvebvn").expect(0).create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let err = api.identity.resolve_bvn("").await.unwrap_err();
    assert_eq!(err.to_string(), "BVN number is required");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_providers() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/bills/airtime/providers")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "ResponseCode": "200",
                "Providers": [
                    {"Code": "airtel", "Name": "Airtel"},
                    {"Code": "mtn", "Name": "MTN"},
                    {"Code": "glo", "Name": "GLO"},
                    {"Code": "etisalat", "Name": "Etisalat"}
                ]
            })
            .to_string(),
        )
        .create();

    let api = WalletsAfrica::new(Config::sandbox().with_base_url(server.url())).unwrap();

    let providers = api.airtime.get_providers().await.unwrap();
    assert_eq!(providers.len(), 4);
    assert_eq!(providers[0].code, "airtel");
    assert_eq!(providers[0].name, "Airtel");
    assert_eq!(providers[3].code, "etisalat");
}

#[tokio::test]
async fn test_client_rejects_invalid_config() {
    let err = WalletsAfrica::live("uvjqzm5xl6bw", "own-secret").unwrap_err();
    assert!(matches!(err, WalletsError::Config { .. }));

    assert!(WalletsAfrica::sandbox().is_ok());
}

#[tokio::test]
async fn test_unreachable_host_fails_before_extraction() {
    // Non-routable address with a short timeout. On an open network this is
    // a connect timeout (Transport); an intercepting proxy may answer the
    // connection with an empty body instead, which the decode-before-status
    // rule maps to Decode. Either way the pipeline fails before any field
    // extraction runs.
    let config = Config::sandbox()
        .with_base_url("http://10.255.255.1:9999")
        .with_request_timeout(Duration::from_millis(50));
    let api = WalletsAfrica::new(config).unwrap();

    let result = api.account.check_balance(Currency::Ngn).await;
    assert!(result.is_err());
    assert!(matches!(
        result.unwrap_err(),
        WalletsError::Transport(_) | WalletsError::Decode(_)
    ));
}
