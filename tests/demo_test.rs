use assert_cmd::Command;
use std::process::Output;

#[test]
fn demo_transcript() {
    let output = run(&[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, expected_transcript());
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = run(&[("RUST_LOG", "bankledger=debug")]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout, expected_transcript());
}

fn run(env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::cargo_bin("bankledger").unwrap();
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().unwrap()
}

fn expected_transcript() -> String {
    let lines = [
        "Added Savings Account[SAV1001] Holder: Alice Johnson Balance: 1500.00",
        "Added Current Account[CUR2001] Holder: Bob Smith Balance: 500.00",
        "Account SAV1001 (Holder: Alice Johnson) - Balance: 1500.00",
        "Account CUR2001 (Holder: Bob Smith) - Balance: 500.00",
        "Deposited 200.00 to SAV1001 (New balance: 1700.00)",
        "Withdrew 600.00 from CUR2001 (New balance: -100.00) [Overdraft limit: 300.00]",
        "Withdrawal of 1000.00 from CUR2001 failed: exceeds overdraft limit (allowed: 200.00)",
        "Interest 51.00 added to Savings SAV1001 at rate 3.00% (New balance: 1751.00)",
        "Transfer of 300.00 from SAV1001 to CUR2001 completed.",
        "=== Bank Accounts Summary ===",
        "Savings Account[SAV1001] Holder: Alice Johnson Balance: 1451.00",
        "Current Account[CUR2001] Holder: Bob Smith Balance: 200.00",
        "Added Savings Account[SAV3002] Holder: Charlie Park Balance: 800.00",
        "Account SAV3002 (Holder: Charlie Park) - Balance: 800.00",
        "Interest 40.00 added to Savings SAV3002 at rate 5.00% (New balance: 840.00)",
        "=== Bank Accounts Summary ===",
        "Savings Account[SAV1001] Holder: Alice Johnson Balance: 1451.00",
        "Current Account[CUR2001] Holder: Bob Smith Balance: 200.00",
        "Savings Account[SAV3002] Holder: Charlie Park Balance: 840.00",
    ];

    let mut expect = String::new();
    for line in lines {
        expect.push_str(line);
        expect.push('\n');
    }

    expect
}
