//! End-to-end lifecycle of a paragraph block as a host drives it.

use std::rc::Rc;

use paragraph::{
    conversion, is_tune_active, BlockData, BlockTool, DefaultHost, KeyboardEvent, Paragraph,
    ParagraphConfig, ParagraphOptions, PasteEvent, Sanitizer, Tune,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn block(data: Option<BlockData>) -> Paragraph {
    let mut options = ParagraphOptions::new(Rc::new(DefaultHost::new()));
    options.data = data;
    Paragraph::new(options)
}

fn block_with_config(config: ParagraphConfig) -> Paragraph {
    Paragraph::new(ParagraphOptions::new(Rc::new(DefaultHost::new())).config(config))
}

#[rstest]
#[case(BlockData::new(""))]
#[case(BlockData::new("plain"))]
#[case(BlockData::with_speakable("Hello <b>World</b>", true))]
#[case(BlockData::with_speakable("one<br>two", false))]
#[case(BlockData::new("<i>a</i> &amp; <a href=\"https://example.com\">b</a>"))]
fn set_then_sync_round_trips(#[case] record: BlockData) {
    let mut p = block(None);
    p.set_data(Some(record.clone()));
    assert_eq!(p.sync_data(), record);
}

#[test]
fn set_absent_record_yields_empty_text() {
    let mut p = block(Some(BlockData::with_speakable("x", true)));
    p.set_data(None);
    let data = p.sync_data();
    assert_eq!(data.text, "");
    assert_eq!(data.speakable, None);
}

#[rstest]
#[case("", false, false)]
#[case("", true, true)]
#[case("   ", false, false)]
#[case("\n\t", false, false)]
#[case("   ", true, true)]
#[case("text", false, true)]
#[case("<br>", false, true)]
#[case("\u{85}", false, true)]
#[case("\u{feff}\u{2028}", false, false)]
fn validate_blank_policy(#[case] text: &str, #[case] preserve_blank: bool, #[case] valid: bool) {
    let p = block_with_config(ParagraphConfig {
        placeholder: String::new(),
        preserve_blank,
    });
    assert_eq!(p.validate(&BlockData::with_speakable(text, false)), valid);
}

#[test]
fn merge_concatenates_and_keeps_speakable() {
    let mut p = block(Some(BlockData::with_speakable("Hello ", true)));
    let element = p.render();

    p.merge(&BlockData::with_speakable("World", false));

    assert_eq!(p.sync_data(), BlockData::with_speakable("Hello World", true));
    assert_eq!(element.inner_html(), "Hello World");
}

#[test]
fn merge_picks_up_unsaved_edits() {
    let mut p = block(Some(BlockData::new("draft")));
    let element = p.render();
    element.set_inner_html("Edited ");

    p.merge(&BlockData::new("<b>tail</b>"));
    assert_eq!(p.save(&element).text, "Edited <b>tail</b>");
}

#[test]
fn double_toggle_restores_speakable() {
    let mut p = block(Some(BlockData::with_speakable("t", true)));
    let before = p.sync_data().is_speakable();

    p.toggle_tune(Tune::Speakable);
    assert_ne!(p.sync_data().is_speakable(), before);
    p.toggle_tune(Tune::Speakable);
    assert_eq!(p.sync_data().is_speakable(), before);
    assert_eq!(p.sync_data().text, "t");
}

#[test]
fn settings_rerender_is_stable() {
    let host = Rc::new(DefaultHost::new());
    let mut p = Paragraph::new(
        ParagraphOptions::new(host.clone()).data(BlockData::with_speakable("t", true)),
    );

    let first = p.render_settings();
    let second = p.render_settings();
    assert_eq!(first.snapshot(), second.snapshot());
    assert!(is_tune_active(&second, &*host, Tune::Speakable));
}

#[test]
fn deletion_clears_stray_break_before_save() {
    let mut p = block(Some(BlockData::new("x")));
    let element = p.render();

    // Browser leaves a lone line break after the user deletes everything
    element.set_inner_html("<br>");
    element.dispatch_key_up(&KeyboardEvent::new("Backspace"));

    let saved = p.save(&element);
    assert_eq!(saved.text, "");
    assert!(!p.validate(&saved));
}

#[test]
fn non_deletion_key_leaves_markup() {
    let mut p = block(None);
    let element = p.render();
    element.set_inner_html("<br>");
    element.dispatch_key_up(&KeyboardEvent::new("ArrowLeft"));
    assert_eq!(p.save(&element).text, "<br>");
}

#[test]
fn paste_replaces_record_and_drops_speakable() {
    let mut p = block(Some(BlockData::with_speakable("old", true)));
    let config = Paragraph::paste_config().unwrap();
    let event = PasteEvent::from_html("<p>Hi</p>", &config).unwrap();

    p.on_paste(&event);

    let data = p.sync_data();
    assert_eq!(data.text, "Hi");
    assert_eq!(data.speakable, None);
    assert!(!data.is_speakable());
}

#[test]
fn save_is_a_pure_read() {
    let mut p = block(Some(BlockData::with_speakable("same", false)));
    let element = p.render();
    let first = p.save(&element);
    let second = p.save(&element);
    assert_eq!(first, second);
    assert_eq!(element.inner_html(), "same");
}

#[test]
fn conversion_round_trip_through_text_field() {
    let config = Paragraph::conversion_config().unwrap();
    let exported =
        conversion::export(&BlockData::with_speakable("a<br>b", true), &config).unwrap();
    assert_eq!(exported, "a<br>b");

    let imported = conversion::import(&exported, &config).unwrap();
    let mut p = block(Some(imported));
    assert_eq!(p.sync_data(), BlockData::new("a<br>b"));
}

#[test]
fn declared_sanitizer_keeps_only_line_breaks() {
    let sanitize = Paragraph::sanitize();
    let sanitizer = Sanitizer::from_config(&sanitize["text"]);

    let cleaned = sanitizer.clean(r#"<p class="x">one<br><b>two</b><script>x()</script></p>"#);
    assert_eq!(cleaned, "one<br>two");

    let mut p = block(None);
    p.set_data(Some(BlockData::new(cleaned)));
    assert_eq!(p.sync_data().text, "one<br>two");
}
