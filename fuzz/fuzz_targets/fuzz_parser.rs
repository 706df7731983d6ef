#![no_main]
use libfuzzer_sys::fuzz_target;

// Any input the parser accepts must survive serialize → reparse in both
// rendering modes; everything else must fail cleanly (no panic).
fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = jsondom::parse(text) else {
        return;
    };

    let compact = value.to_text();
    assert_eq!(
        jsondom::parse(&compact).expect("compact output must reparse"),
        value
    );

    let pretty = value.to_text_pretty();
    assert_eq!(
        jsondom::parse(&pretty).expect("pretty output must reparse"),
        value
    );
});
