use drawpoker_cli::run;
use serde_json::Value;
use serial_test::serial;

const VARS: &[&str] = &[
    "DRAWPOKER_CONFIG",
    "DRAWPOKER_STARTING_BALANCE",
    "DRAWPOKER_DENOMINATION",
    "DRAWPOKER_BET",
    "DRAWPOKER_SEED",
    "DRAWPOKER_STRATEGY",
];

fn clear_env() {
    for key in VARS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn cfg_json() -> (i32, Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["drawpoker", "cfg"], &mut out, &mut err);
    let json = if code == 0 {
        serde_json::from_slice(&out).unwrap()
    } else {
        Value::Null
    };
    (code, json, String::from_utf8_lossy(&err).into_owned())
}

fn write_config(name: &str, body: &str) -> String {
    let dir = std::path::Path::new("target/test_config");
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
#[serial]
fn precedence_env_over_file_over_default() {
    clear_env();
    let path = write_config(
        "precedence.toml",
        "starting_balance = \"150.50\"\ndenomination = 0.5\nbet = 3\nseed = 456\n",
    );
    unsafe {
        std::env::set_var("DRAWPOKER_CONFIG", &path);
    }

    let (code, json, err) = cfg_json();
    assert_eq!(code, 0, "stderr: {err}");
    assert_eq!(json["starting_balance"]["value"], "150.50");
    assert_eq!(json["starting_balance"]["source"], "file");
    assert_eq!(json["denomination"]["value"], "0.50");
    assert_eq!(json["denomination"]["source"], "file");
    assert_eq!(json["bet"]["value"], 3);
    assert_eq!(json["seed"]["value"], 456);
    assert_eq!(json["strategy"]["value"], "paying");
    assert_eq!(json["strategy"]["source"], "default");

    unsafe {
        std::env::set_var("DRAWPOKER_SEED", "123");
        std::env::set_var("DRAWPOKER_DENOMINATION", "1");
        std::env::set_var("DRAWPOKER_STRATEGY", "discard");
    }
    let (code, json, _) = cfg_json();
    clear_env();

    assert_eq!(code, 0);
    assert_eq!(json["seed"]["value"], 123);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["denomination"]["value"], "1.00");
    assert_eq!(json["denomination"]["source"], "env");
    assert_eq!(json["strategy"]["value"], "discard");
    assert_eq!(json["bet"]["source"], "file");
}

#[test]
#[serial]
fn starting_balance_is_rounded_half_even() {
    clear_env();
    unsafe {
        std::env::set_var("DRAWPOKER_STARTING_BALANCE", "10.005");
    }
    let (code, json, _) = cfg_json();
    clear_env();
    assert_eq!(code, 0);
    assert_eq!(json["starting_balance"]["value"], "10.00");
}

#[test]
#[serial]
fn invalid_values_exit_two() {
    for (key, value) in [
        ("DRAWPOKER_DENOMINATION", "0.10"),
        ("DRAWPOKER_BET", "0"),
        ("DRAWPOKER_SEED", "abc"),
        ("DRAWPOKER_STRATEGY", "oracle"),
        ("DRAWPOKER_STARTING_BALANCE", "-5"),
    ] {
        clear_env();
        unsafe {
            std::env::set_var(key, value);
        }
        let (code, _, err) = cfg_json();
        clear_env();
        assert_eq!(code, 2, "{key}={value}");
        assert!(err.starts_with("Error: Configuration error"), "{key}: {err}");
    }
}

#[test]
#[serial]
fn malformed_file_exits_two() {
    clear_env();
    let path = write_config("broken.toml", "bet = [oops");
    unsafe {
        std::env::set_var("DRAWPOKER_CONFIG", &path);
    }
    let (code, _, err) = cfg_json();
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("cannot parse config file"));
}

#[test]
#[serial]
fn configured_wager_reaches_the_game() {
    clear_env();
    unsafe {
        std::env::set_var("DRAWPOKER_DENOMINATION", "0.50");
        std::env::set_var("DRAWPOKER_BET", "2");
    }
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["drawpoker", "paytable"], &mut out, &mut err);
    clear_env();
    assert_eq!(code, 0);
    assert!(String::from_utf8_lossy(&out).contains("wager 1.00"));
}
