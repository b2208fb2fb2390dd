use super::*;

#[test]
fn test_plain_text_is_one_paragraph() {
    assert_eq!(
        markdown_to_html("Nothing special here, just text."),
        "<p>Nothing special here, just text.</p>"
    );
}

#[test]
fn test_heading_precedence() {
    assert_eq!(markdown_to_html("### Title"), "<h3>Title</h3>");
    assert_eq!(markdown_to_html("## Title"), "<h2>Title</h2>");
    assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>");
}

#[test]
fn test_four_hashes_are_paragraph_text() {
    assert_eq!(markdown_to_html("#### Deep"), "<p>#### Deep</p>");
}

#[test]
fn test_bold_non_greedy_left_to_right() {
    assert_eq!(
        markdown_to_html("**a** and **b**"),
        "<p><strong>a</strong> and <strong>b</strong></p>"
    );
}

#[test]
fn test_bold_before_italic() {
    let html = markdown_to_html("**bold**");
    assert_eq!(html, "<p><strong>bold</strong></p>");
    assert!(!html.contains("<em>"));
}

#[test]
fn test_italic() {
    assert_eq!(
        markdown_to_html("an *italic* word"),
        "<p>an <em>italic</em> word</p>"
    );
}

#[test]
fn test_list_grouping() {
    assert_eq!(
        markdown_to_html("- one\n- two"),
        "<ul><li>one</li>\n<li>two</li></ul>"
    );
}

#[test]
fn test_blank_line_splits_lists() {
    assert_eq!(
        markdown_to_html("- one\n\n- two"),
        "<ul><li>one</li></ul>\n<ul><li>two</li></ul>"
    );
}

#[test]
fn test_paragraph_segmentation() {
    assert_eq!(markdown_to_html("a\n\nb"), "<p>a</p>\n<p>b</p>");
    assert_eq!(markdown_to_html("a\nb"), "<p>a\nb</p>");
}

#[test]
fn test_list_never_wrapped_in_paragraph() {
    assert_eq!(
        markdown_to_html("Intro:\n- a\n- b"),
        "<p>Intro:</p>\n<ul><li>a</li>\n<li>b</li></ul>"
    );
}

#[test]
fn test_total_on_degenerate_input() {
    for input in ["", "   ", "\n\n\n", "*", "**", "***", "#", "###", "- ", "-", "\r\n"] {
        let html = markdown_to_html(input);
        assert!(html.is_empty() || html.starts_with('<'), "input {:?}", input);
    }
    assert_eq!(markdown_to_html(""), "");
    assert_eq!(markdown_to_html("  \n\t\n"), "");
    assert_eq!(markdown_to_html("*"), "<p>*</p>");
    assert_eq!(markdown_to_html("#"), "<p>#</p>");
}

#[test]
fn test_html_passes_through_unescaped() {
    assert_eq!(
        markdown_to_html("<span>x</span> & y"),
        "<p><span>x</span> & y</p>"
    );
}

#[test]
fn test_escape_html_option() {
    let options = WriterOptions { escape_html: true };
    assert_eq!(
        markdown_to_html_with_options("# a < b\n\n**&**", &options),
        "<h1>a &lt; b</h1>\n<p><strong>&amp;</strong></p>"
    );
}

#[test]
fn test_crlf_input() {
    assert_eq!(
        markdown_to_html("# Title\r\n\r\nBody\r\n"),
        "<h1>Title</h1>\n<p>Body</p>"
    );
}

#[test]
fn test_full_article() {
    let markdown = "\
# Как заварить чай

Чай **любят** все. Заваривать его нужно *правильно*.

## Что понадобится

- Чайник
- Заварка **высшего** сорта
- Вода

### Шаги

Вскипятите воду.
Залейте заварку.

#### Заметка на полях";

    insta::assert_snapshot!(markdown_to_html(markdown), @r"
    <h1>Как заварить чай</h1>
    <p>Чай <strong>любят</strong> все. Заваривать его нужно <em>правильно</em>.</p>
    <h2>Что понадобится</h2>
    <ul><li>Чайник</li>
    <li>Заварка <strong>высшего</strong> сорта</li>
    <li>Вода</li></ul>
    <h3>Шаги</h3>
    <p>Вскипятите воду.
    Залейте заварку.</p>
    <p>#### Заметка на полях</p>
    ");
}
