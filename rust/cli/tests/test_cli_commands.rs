use drawpoker_cli::run;
use serial_test::serial;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn deal_prints_hand_and_rank() {
    let (code, out, err) = run_args(&["drawpoker", "deal", "--seed", "1"]);
    assert_eq!(code, 0, "stderr: {err}");
    assert!(out.starts_with("Hand: "));
    assert!(out.contains("\nRank: "));
}

#[test]
fn deal_is_deterministic_with_same_seed() {
    let (_, a, _) = run_args(&["drawpoker", "deal", "--seed", "77"]);
    let (_, b, _) = run_args(&["drawpoker", "deal", "--seed", "77"]);
    assert_eq!(a, b);
}

#[test]
fn eval_classifies_short_form_cards() {
    let cases = [
        (["Ah", "2d", "3c", "4s", "5h"], "Straight"),
        (["Js", "Jh", "5d", "5c", "9s"], "Two Pair"),
        (["Js", "Jh", "Jd", "5c", "5s"], "Full House"),
        (["Qh", "Qd", "2c", "7s", "9h"], "Jacks or Better"),
        (["Th", "Td", "2c", "7s", "9h"], "Nothing"),
        (["9♠", "10♠", "J♠", "Q♠", "K♠"], "Straight Flush"),
    ];
    for (cards, expected) in cases {
        let mut args = vec!["drawpoker", "eval"];
        args.extend(cards);
        let (code, out, err) = run_args(&args);
        assert_eq!(code, 0, "{cards:?}: {err}");
        assert!(
            out.contains(&format!("Rank: {}\n", expected)),
            "{cards:?} should be {expected}, got {out}"
        );
    }
}

#[test]
fn eval_rejects_bad_card_with_exit_two() {
    let (code, out, err) = run_args(&["drawpoker", "eval", "As", "Ks", "Qs", "Js", "Zz"]);
    assert_eq!(code, 2);
    assert!(out.is_empty(), "errors must not go to stdout");
    assert!(err.starts_with("Error: Invalid input: Invalid card 'Zz'"));
}

#[test]
#[serial]
fn paytable_for_half_denomination() {
    let (code, out, _) = run_args(&["drawpoker", "paytable", "--denom", "0.50", "--bet", "3"]);
    assert_eq!(code, 0);
    assert!(out.contains("wager 1.50"));
    let flush = out
        .lines()
        .find(|l| l.starts_with("FLUSH "))
        .expect("flush row");
    assert!(flush.trim_end().ends_with("9.00"), "{flush}");
}

#[test]
#[serial]
fn paytable_rejects_unsupported_denomination() {
    let (code, _, err) = run_args(&["drawpoker", "paytable", "--denom", "5"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid denomination: 5"));
}

#[test]
fn help_goes_to_stdout_with_exit_zero() {
    let (code, out, err) = run_args(&["drawpoker", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("Usage"));
    assert!(err.is_empty());
}

#[test]
fn unknown_command_lists_commands_on_stderr() {
    let (code, out, err) = run_args(&["drawpoker", "bogus"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    for c in ["play", "deal", "eval", "sim", "cfg", "paytable"] {
        assert!(err.contains(&format!("  {}\n", c)), "missing {c} in {err}");
    }
}
