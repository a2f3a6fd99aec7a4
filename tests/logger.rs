use chrono::Local;
use log2u::core::platform;
use log2u::{Color, Logger, TextStyle};

fn buffer_logger(
    color: bool,
    stack: bool,
    rich_output: bool,
    time_format: &str,
) -> Logger<Vec<u8>> {
    Logger::new(color, true, stack, rich_output, Vec::new(), time_format)
}

fn take(log: &mut Logger<Vec<u8>>) -> String {
    let bytes = log.set_output(Vec::new());
    String::from_utf8(bytes).expect("log output is utf-8")
}

#[test]
fn info_then_debug_scenario() {
    let mut log = buffer_logger(false, false, true, "%Y-%m-%d");
    let today = Local::now().format("%Y-%m-%d").to_string();

    log.info("hello");
    let first = take(&mut log);
    assert_eq!(first, format!("> #1 {} ⇒  INF > hello\n", today));
    assert!(!first.contains("\x1b["));

    let line = line!() + 1;
    log.debug("x");
    let second = take(&mut log);
    assert!(second.starts_with(&format!("> #2 {} ⇒  ON ", today)));
    assert!(second.contains(&format!("{}:{}", file!(), line)));
    assert!(second.ends_with(" ⇒  DBG > x\n"));
    assert_eq!(log.next_id(), 3);
}

#[test]
fn ids_increase_by_one_across_mixed_severities() {
    let mut log = buffer_logger(false, true, true, "T");
    let calls: [fn(&mut Logger<Vec<u8>>); 7] = [
        |l| l.critical("a"),
        |l| l.info("b"),
        |l| l.debug("c"),
        |l| l.custom_ansi_print("d", Color::Cyan),
        |l| l.successf(format_args!("{}", "e")),
        |l| l.warning("f"),
        |l| l.errorf(format_args!("g{}", 1)),
    ];
    for (n, call) in calls.iter().enumerate() {
        call(&mut log);
        let out = take(&mut log);
        assert!(out.starts_with(&format!("> #{} T ⇒  ", n + 1)), "{}", out);
    }
}

#[test]
fn custom_code_is_not_validated() {
    let mut log = buffer_logger(true, false, true, "T");
    log.custom_ansi_print("hi", 999);
    let out = take(&mut log);
    if platform::supports_ansi() {
        assert_eq!(out, "\x1b[999m> #1 T ⇒  CUS > hi\n\x1b[49m\x1b[0m");
    } else {
        assert_eq!(out, "> #1 T ⇒  CUS > hi\n");
    }
}

#[test]
fn custom_accepts_text_styles() {
    let mut log = buffer_logger(true, true, true, "T");
    log.custom_ansi_print("struck", TextStyle::CrossedOut);
    let out = take(&mut log);
    if platform::supports_ansi() {
        assert_eq!(
            out,
            "\x1b[9m> #1 T ⇒  ON : ⇒  CUS > struck\n\x1b[49m\x1b[0m"
        );
    } else {
        assert_eq!(out, "> #1 T ⇒  ON : ⇒  CUS > struck\n");
    }
}

#[test]
fn custom_with_stack_renders_empty_call_site() {
    let mut log = buffer_logger(false, true, true, "T");
    log.custom_ansi_print("hi", 999);
    assert_eq!(take(&mut log), "> #1 T ⇒  ON : ⇒  CUS > hi\n");
}

#[test]
fn plain_mode_prints_raw_text_for_any_configuration() {
    for color in [false, true] {
        for stack in [false, true] {
            let mut log = buffer_logger(color, stack, false, "T");
            log.info("one");
            log.debug("two ⇒ > #9");
            log.custom_ansi_print("three", 41);
            assert_eq!(take(&mut log), "one\ntwo ⇒ > #9\nthree\n");
        }
    }
}

#[test]
fn disabled_color_never_emits_escapes() {
    let mut log = buffer_logger(false, true, true, "%H:%M:%S");
    log.info("a");
    log.success("b");
    log.warning("c");
    log.error("d");
    log.critical("e");
    log.debug("f");
    log.custom_ansi_print("g", Color::BrightReverseRed);
    assert!(!take(&mut log).contains("\x1b["));
}

#[test]
fn colored_severities_use_their_codes() {
    if !platform::supports_ansi() {
        return;
    }
    let mut log = buffer_logger(true, false, true, "T");
    log.info("i");
    log.success("s");
    log.warning("w");
    log.error("e");
    log.critical("c");
    let out = take(&mut log);
    let prefixes: Vec<&str> = out
        .split("\x1b[49m\x1b[0m")
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| &chunk[..5])
        .collect();
    assert_eq!(
        prefixes,
        vec!["\x1b[37m", "\x1b[32m", "\x1b[33m", "\x1b[31m", "\x1b[35m"]
    );
}

#[test]
fn formatted_variants_match_plain_variants() {
    let mut plain = buffer_logger(true, false, true, "T");
    let mut formatted = buffer_logger(true, false, true, "T");
    let value = 42;

    plain.print(&format!("v={}", value));
    formatted.printf(format_args!("v={}", value));
    plain.info(&format!("v={}", value));
    formatted.infof(format_args!("v={}", value));
    plain.success(&format!("v={:03}", value));
    formatted.successf(format_args!("v={:03}", value));
    plain.warning(&format!("{:?}", "q"));
    formatted.warningf(format_args!("{:?}", "q"));
    plain.error(&format!("{}-{}", 1, 2));
    formatted.errorf(format_args!("{}-{}", 1, 2));
    plain.critical(&format!("{:>4}", "r"));
    formatted.criticalf(format_args!("{:>4}", "r"));
    plain.custom_ansi_print(&format!("c{}", value), 7);
    formatted.custom_ansi_printf(format_args!("c{}", value), 7);

    assert_eq!(take(&mut plain), take(&mut formatted));
}
