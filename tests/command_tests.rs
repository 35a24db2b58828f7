use hcicmd::command::{CommandArg, CommandArgError, parse_command, parse_command_with_capacity};
use hcicmd::frame::{FrameEncodeError, HciFrameCodec};
use hcicmd::hex::HexDecodeError;

const NO_PARAMS: &[&str] = &[];

#[test]
fn parameters_are_concatenated_in_order() {
    let command = parse_command("01", "0001", &["338B9E", "08", "00"]).expect("valid command");

    assert_eq!(command.opcode().ogf(), 0x01);
    assert_eq!(command.opcode().ocf(), 0x0001);
    assert_eq!(command.parameters(), [0x33u8, 0x8B, 0x9E, 0x08, 0x00].as_slice());
    assert_eq!(
        HciFrameCodec::encode(&command),
        vec![0x01, 0x01, 0x04, 0x05, 0x33, 0x8B, 0x9E, 0x08, 0x00]
    );
}

#[test]
fn ocf_is_read_most_significant_byte_first() {
    let command = parse_command("3f", "03FF", NO_PARAMS).expect("valid command");
    assert_eq!(command.opcode().raw(), 0xFFFF);

    // Three digits still make two bytes.
    let command = parse_command("0x04", "0x009", NO_PARAMS).expect("valid command");
    assert_eq!(command.opcode().ocf(), 0x0009);
}

#[test]
fn ogf_above_3f_is_rejected() {
    let err = parse_command("40", "0001", NO_PARAMS).expect_err("out of range");

    assert_eq!(err.arg(), CommandArg::Ogf);
    assert_eq!(
        err,
        CommandArgError::Encode {
            arg: CommandArg::Ogf,
            value: "40".into(),
            source: FrameEncodeError::OpcodeGroupOutOfRange(0x40),
        }
    );
}

#[test]
fn ocf_above_3ff_is_rejected() {
    let err = parse_command("01", "0400", NO_PARAMS).expect_err("out of range");

    assert_eq!(err.arg(), CommandArg::Ocf);
    assert!(matches!(
        err,
        CommandArgError::Encode {
            source: FrameEncodeError::OpcodeCommandOutOfRange(0x0400),
            ..
        }
    ));
}

#[test]
fn field_widths_are_enforced() {
    assert!(matches!(
        parse_command("", "0001", NO_PARAMS),
        Err(CommandArgError::Width {
            arg: CommandArg::Ogf,
            ..
        })
    ));

    assert!(matches!(
        parse_command("01", "01", NO_PARAMS),
        Err(CommandArgError::Width {
            arg: CommandArg::Ocf,
            ..
        })
    ));

    assert!(matches!(
        parse_command("010", "0001", NO_PARAMS),
        Err(CommandArgError::Hex {
            arg: CommandArg::Ogf,
            source: HexDecodeError::BufferTooSmall { .. },
            ..
        })
    ));
}

#[test]
fn failing_parameter_is_identified() {
    let err = parse_command("01", "0001", &["00", "zz"]).expect_err("bad hex");

    assert_eq!(err.arg(), CommandArg::Parameter(1));
    assert_eq!(err.to_string(), "parameter #2 \"zz\": invalid hex digit 'z' at position 0");
}

#[test]
fn parameters_beyond_the_buffer_are_rejected() {
    let big = "00".repeat(200);

    let err = parse_command("01", "0001", &[big.as_str(), big.as_str()]).expect_err("too large");
    assert_eq!(err.arg(), CommandArg::Parameter(1));
    assert!(matches!(
        err,
        CommandArgError::Hex {
            source: HexDecodeError::BufferTooSmall {
                required: 200,
                capacity: 55
            },
            ..
        }
    ));

    let err = parse_command_with_capacity("01", "0001", &["0102", "030405"], 8).expect_err("small");
    assert_eq!(err.arg(), CommandArg::Parameter(1));
}

#[test]
fn empty_parameter_contributes_nothing() {
    let command = parse_command("03", "0003", &["", "0x"]).expect("valid command");
    assert!(command.parameters().is_empty());
}
