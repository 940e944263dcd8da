mod common;

use common::{MockSerial, echo_unknown, manager, manager_with};
use serialcmd::{Config, Field, Manager, ManualClock, ParseState, Transport, command_fn};

#[test]
fn overlong_message_drops_rest_of_line() {
    let clock = ManualClock::new(0);
    let config = Config::default().with_max_message_len(10);
    let mut m = manager_with(&clock, config).with_fallback(echo_unknown);
    m.transport_mut().push("AB:k=vvvvvvvvvvvvXY\n");
    assert_eq!(m.poll(), 0);
    assert_eq!(m.state(), ParseState::Idle);
    assert_eq!(m.transport().output(), "ERR:Too Long: (CommandManager)\n");
}

#[test]
fn overlong_line_reports_once() {
    let clock = ManualClock::new(0);
    let config = Config::default().with_max_message_len(10);
    let mut m = manager_with(&clock, config).with_fallback(echo_unknown);
    m.transport_mut().push(&format!("{}\n", "A".repeat(30)));
    assert_eq!(m.poll(), 0);
    assert_eq!(m.state(), ParseState::Idle);
    assert_eq!(m.transport().output(), "ERR:Too Long: (CommandManager)\n");
}

#[test]
fn overlong_command_reports_reason() {
    let clock = ManualClock::new(0);
    let mut m = manager(&clock).with_fallback(echo_unknown);
    m.transport_mut().push("ABCDEFGHIJKLMNOPQ");
    m.poll();
    assert!(matches!(m.state(), ParseState::Error(_)));
    m.transport_mut().push("RSTUVW\n");
    assert_eq!(m.poll(), 0);
    assert_eq!(m.state(), ParseState::Idle);
    assert_eq!(
        m.transport().output(),
        "ERR:Command Too Long: (CommandManager)\n"
    );
}

#[test]
fn overlong_key_and_value_report_reason() {
    let clock = ManualClock::new(0);
    let mut m = manager(&clock);
    m.transport_mut().push("C:abcdefghijk");
    m.poll();
    assert_eq!(
        m.transport_mut().take_output(),
        "ERR:Param Key Too Long: (CommandManager)\n"
    );

    m.transport_mut().push(&format!("\nC:k={}", "v".repeat(33)));
    m.poll();
    assert_eq!(
        m.transport_mut().take_output(),
        "ERR:Param Value Too Long: (CommandManager)\n"
    );
}

#[test]
fn manager_recovers_after_overflow() {
    let clock = ManualClock::new(0);
    let mut pong = command_fn(|ctx, _| ctx.send_command("PONG", "", "", &[]) > 0);
    let config = Config::default().with_max_message_len(8);
    let mut m = manager_with(&clock, config);
    m.register("PING", &mut pong).unwrap();

    m.transport_mut().push("XXXXXXXXX\n");
    m.poll();
    m.transport_mut().take_output();

    m.transport_mut().push("PING\n");
    assert_eq!(m.poll(), 1);
    assert_eq!(m.transport().output(), "PONG\n");
}

#[test]
fn poll_drains_many_messages() {
    let clock = ManualClock::new(0);
    let mut count = 0;
    let mut counter = command_fn(|_, _| {
        count += 1;
        true
    });
    let mut m = manager(&clock);
    m.register("N", &mut counter).unwrap();

    m.transport_mut().push(&"N\n".repeat(50));
    assert_eq!(m.poll(), 50);
    assert_eq!(m.transport().pending(), 0);
    m.into_transport();
    assert_eq!(count, 50);
}

#[test]
fn message_split_across_polls() {
    let clock = ManualClock::new(0);
    let mut m = manager(&clock).with_fallback(echo_unknown);
    m.transport_mut().push("FO");
    assert_eq!(m.poll(), 0);
    m.transport_mut().push("O:a");
    assert_eq!(m.poll(), 0);
    m.transport_mut().push("=1\n");
    assert_eq!(m.poll(), 1);
    assert_eq!(m.transport().output(), "UNKNOWN:FOO\n");
    assert_eq!(m.message().param_value("a"), Some("1"));
}

#[test]
fn handler_reply_does_not_disturb_parser() {
    let clock = ManualClock::new(0);
    let mut echo = command_fn(|ctx, params| {
        ctx.send_command("ECHO", "", "", params);
        true
    });
    let mut m = manager(&clock);
    m.register("E", &mut echo).unwrap();

    m.transport_mut().push("E:a=1:b=2\nE:c=3\n");
    assert_eq!(m.poll(), 2);
    assert_eq!(m.transport().output(), "ECHO:a=1:b=2\nECHO:c=3\n");
    assert_eq!(m.command(), "E");
    assert_eq!(m.param_count(), 1);
}

#[test]
fn non_ascii_bytes_are_latin1() {
    let clock = ManualClock::new(0);
    let mut m = manager(&clock).with_fallback(echo_unknown);
    m.transport_mut().push_bytes(b"\xB0C\n");
    m.poll();
    assert_eq!(m.command(), "\u{b0}C");
    assert_eq!(m.transport().output(), "UNKNOWN:\u{b0}C\n");
}

#[test]
fn read_byte_none_stops_draining() {
    struct Liar(MockSerial);

    impl Transport for Liar {
        fn available(&mut self) -> usize {
            1
        }

        fn read_byte(&mut self) -> Option<u8> {
            self.0.read_byte()
        }

        fn write_bytes(&mut self, bytes: &[u8]) {
            self.0.write_bytes(bytes);
        }
    }

    let clock = ManualClock::new(0);
    let mut serial = MockSerial::new();
    serial.push("DEBUG\n");
    let mut m = Manager::new(Liar(serial), &clock, Config::default()).unwrap();
    assert_eq!(m.poll(), 1);
    assert_eq!(m.into_transport().0.output(), "DEBUG:OFF\n");
}

#[test]
fn field_push_byte_respects_limit() {
    let mut f: Field<4> = Field::new();
    assert!(f.push_byte(b'a', 2).is_ok());
    assert!(f.push_byte(b'b', 2).is_ok());
    assert!(f.push_byte(b'c', 2).is_err());
    assert_eq!(f, "ab");

    // Two bytes once encoded.
    assert!(f.push_byte(0xE9, 4).is_ok());
    assert_eq!(f.len(), 4);
    assert!(f.push_byte(b'd', 10).is_err());
}

#[test]
fn field_truncates_whole_chars() {
    let f: Field<3> = Field::truncated("a\u{e9}b");
    assert_eq!(f, "a\u{e9}");
    assert_eq!(Field::<3>::CAPACITY, 3);
}

#[test]
fn field_trim_and_strip() {
    let mut f: Field<16> = Field::truncated("  PING;  ");
    f.trim();
    assert_eq!(f, "PING;");
    assert!(f.strip_suffix_byte(b';'));
    assert!(!f.strip_suffix_byte(b';'));
    assert_eq!(f.to_string(), "PING");
    f.clear();
    assert!(f.is_empty());
}
