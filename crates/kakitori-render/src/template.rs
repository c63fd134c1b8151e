//! HTML fragments for the worksheet pages.
//!
//! The layout is a fixed-width table of entries, each showing the
//! readings and the english gloss next to a large answer cell. On the
//! quiz page the glyph is hidden by CSS; the key page shows it.

/// Page opening through the start of the entry table. `{key_style}`
/// controls glyph visibility.
const PAGE_HEAD: &str = r#"<html>
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<style type="text/css">
<!--

.kanji-table {
    font-size: 8px;
    width: 8in;
}

.entry {
    float: left;
    page-break-inside: avoid;
}

.entry > div {
    float: left;
    box-sizing: border-box;
    height: 4em;
}

.question {
    border: solid .01em black;
}

.question > div {
    box-sizing: border-box;
    width: 8em;
    overflow: hidden;
    padding: .2em;
    text-align: right;
}

.reading {
    height: 2.5em;
}

.reading > .content {
    font-size: .8em;
}

.meaning {
    height: 1.5em;
}

.kanji {
    width: 4em;
    text-align: center;
    border: solid .01em black;
}

.kanji > .content {
    font-size: 3em;
    {key_style}
}

-->
</style>
</head>
<body>
<div class="kanji-table">
"#;

/// One worksheet entry.
const ENTRY: &str = r#"<div class="entry">
<div class="question">
<div class="reading">
<div class="content">{readings}</div>
</div>
<div class="meaning">{english}</div>
</div>
<div class="kanji">
<span class="content">{glyph}</span>
</div>
</div>
"#;

pub const PAGE_FOOT: &str = "</div>\n</body>\n</html>\n";

/// Render the page head; `show_key` leaves the glyph visible.
pub fn page_head(show_key: bool) -> String {
    let key_style = if show_key { "" } else { "display: none;" };
    PAGE_HEAD.replace("{key_style}", key_style)
}

/// Render one entry.
pub fn entry(readings: &str, english: &str, glyph: &str) -> String {
    ENTRY
        .replace("{readings}", readings)
        .replace("{english}", english)
        .replace("{glyph}", glyph)
}
