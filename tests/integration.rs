use std::str::from_utf8;

use checking_ledger::bin_utils::{
    Service,
    seed_parser::{default_seeds, parse_seeds},
};

const SEED_FILE: &str = include_str!("accounts.csv");

fn run_session(script: &str, seed_file: Option<&str>) -> String {
    let seeds = match seed_file {
        Some(contents) => parse_seeds(contents.as_bytes()).unwrap(),
        None => default_seeds(),
    };
    let mut output = Vec::new();
    let service = Service {
        input: script.as_bytes(),
        output: &mut output,
        seeds,
    };
    service.run().unwrap();
    from_utf8(&output).unwrap().to_owned()
}

#[test]
fn teller_session() {
    let output = run_session(
        "1\n1234\n2\n50\n1\n3\n30\n3\n500\n4\n0\n",
        None,
    );
    assert!(output.contains("Deposit of 50 recorded"));
    assert!(output.contains("Withdrawal of 30 recorded"));
    assert!(output.contains("Insufficient funds, current balance is 120"));
    assert!(output.contains("Cezar Augusto Mezzalira, your account balance is 150"));

    let statement: Vec<Vec<&str>> = output
        .lines()
        .skip_while(|line| !line.contains("Statement for account 1/1234"))
        .skip(1)
        .take(4)
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(
        statement,
        vec![
            vec!["DEP", "+100", "C", "100"],
            vec!["DEP", "+50", "C", "150"],
            vec!["SAQ", "-30", "D", "120"],
            vec!["Balance:", "120"],
        ]
    );
    assert!(output.ends_with("Thank you for banking with us!\nSee you soon!\n"));
}

#[test]
fn invalid_amounts_keep_the_session_going() {
    let output = run_session("1\n1234\n2\n-10\n3\nabc\n1\n", None);
    assert!(output.contains("Amount must be greater than zero for Deposit, got -10"));
    assert!(output.contains("`abc` is not a valid number"));
    assert!(output.contains("your account balance is 100"));
}

#[test]
fn unknown_selector_is_reported() {
    let output = run_session("1\n1234\n7\nx\n0\n", None);
    assert_eq!(output.matches("Invalid operation").count(), 2);
    assert!(output.contains("See you soon!"));
}

#[test]
fn missing_account_ends_the_session() {
    let output = run_session("9\n9999\n1\n", None);
    assert!(output.contains("Account not found!"));
    assert!(!output.contains("CHECK BALANCE"));
}

#[test]
fn unparseable_identity_is_not_found() {
    for script in ["abc\n1234\n1\n", "1\n-1\n1\n"] {
        let output = run_session(script, None);
        assert!(output.ends_with("Account not found!\n"));
        assert!(!output.contains("CHECK BALANCE"));
    }
}

#[test]
fn oversized_deposit_is_reported() {
    let output = run_session("1\n1234\n2\n79228162514264337593543950335\n1\n", None);
    assert!(output.contains("Deposit of 79228162514264337593543950335 would overflow the balance of 100"));
    assert!(output.contains("your account balance is 100"));
}

#[test]
fn seeded_accounts_from_csv() {
    let output = run_session("2\n555\n4\n3\n1\n2\n20.50\n1\n", Some(SEED_FILE));
    assert!(output.contains("Statement for account 2/555\nBalance: 0\n"));
    assert!(output.contains("Insufficient funds, current balance is 0"));
    assert!(output.contains("Maria Oliveira, your account balance is 20.50"));
}

#[test]
fn end_of_input_closes_quietly() {
    let output = run_session("1\n", None);
    assert_eq!(
        output,
        "Enter the branch number: Enter the account number: "
    );
}
