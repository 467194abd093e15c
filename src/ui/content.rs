use fltk::{
    app,
    app::Sender,
    button::Button,
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Pack, Scroll, ScrollType},
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
};

use crate::app::catalog::DocEntry;
use crate::app::messages::Message;
use crate::app::render::{plan, stagger_delay, RenderNode};
use crate::app::syntax::SnippetHighlighter;
use crate::ui::theme::Palette;

/// Width of the rendered column, the max-width reading measure of the site.
pub const CONTENT_WIDTH: i32 = 720;

const LISTING_HEADER_HEIGHT: i32 = 30;

/// The scrolling document pane. Realizes the render plan as native widgets:
/// headings, wrapped body text, highlighted code listings with a copy
/// button, and link buttons that open the system browser.
pub struct ContentView {
    scroll: Scroll,
    pack: Pack,
    copy_buttons: Vec<Button>,
    code_texts: Vec<String>,
}

impl ContentView {
    /// Build the (empty) pane inside the currently open group.
    pub fn new() -> Self {
        let mut scroll = Scroll::default();
        scroll.set_type(ScrollType::Vertical);
        scroll.set_frame(FrameType::FlatBox);
        let mut pack = Pack::default().with_size(CONTENT_WIDTH, 10);
        pack.set_spacing(14);
        pack.end();
        scroll.end();

        Self {
            scroll,
            pack,
            copy_buttons: Vec::new(),
            code_texts: Vec::new(),
        }
    }

    /// The code text behind the `index`-th copy button.
    pub fn code_text(&self, index: usize) -> Option<&str> {
        self.code_texts.get(index).map(String::as_str)
    }

    /// Number of code listings in the current document.
    pub fn code_count(&self) -> usize {
        self.code_texts.len()
    }

    pub fn set_copy_label(&mut self, index: usize, copied: bool) {
        if let Some(button) = self.copy_buttons.get_mut(index) {
            button.set_label(if copied { "Copied!" } else { "Copy" });
            button.redraw();
        }
    }

    /// Tear down the previous document and build the new one, scrolled back
    /// to the top. With animations on, blocks are revealed on staggered
    /// timers instead of all at once.
    pub fn rebuild(
        &mut self,
        entry: &DocEntry,
        highlighter: &mut SnippetHighlighter,
        palette: &Palette,
        font_size: u32,
        animate: bool,
        sender: &Sender<Message>,
    ) {
        self.pack.clear();
        self.copy_buttons.clear();
        self.code_texts.clear();

        self.scroll.set_color(palette.window_bg);
        self.pack.set_color(palette.window_bg);
        self.pack.resize(
            self.scroll.x() + 24,
            self.scroll.y() + 16,
            CONTENT_WIDTH,
            10,
        );

        self.pack.begin();

        let mut name = Frame::default().with_size(0, 52);
        name.set_label(&entry.name);
        name.set_label_font(Font::HelveticaBold);
        name.set_label_size(font_size as i32 + 12);
        name.set_label_color(palette.text);
        name.set_align(Align::Left | Align::Inside);

        for (index, node) in plan(entry).iter().enumerate() {
            match node {
                RenderNode::Heading { text } => {
                    let mut heading = Frame::default().with_size(0, 34);
                    heading.set_label(text);
                    heading.set_label_font(Font::HelveticaBold);
                    heading.set_label_size(font_size as i32 + 4);
                    heading.set_label_color(palette.text);
                    heading.set_align(Align::Left | Align::Inside);
                    reveal(&heading, index, animate);
                }
                RenderNode::Body { text } => {
                    let lines = wrapped_line_count(text, chars_per_line(CONTENT_WIDTH, font_size));
                    let height = lines as i32 * (font_size as i32 + 6) + 8;
                    let mut body = Frame::default().with_size(0, height);
                    body.set_label(text);
                    body.set_label_size(font_size as i32);
                    body.set_label_color(palette.text_secondary);
                    body.set_align(Align::Left | Align::Inside | Align::Wrap);
                    reveal(&body, index, animate);
                }
                RenderNode::Listing { language, code } => {
                    let block = self.build_listing(
                        language,
                        code,
                        highlighter,
                        palette,
                        font_size,
                        sender,
                    );
                    reveal(&block, index, animate);
                }
                RenderNode::LinkButton { label, url } => {
                    let mut link = Button::default().with_size(0, 36);
                    link.set_label(label);
                    link.set_frame(FrameType::FlatBox);
                    link.set_color(palette.window_bg);
                    link.set_label_color(palette.accent);
                    link.set_label_size(font_size as i32);
                    link.set_align(Align::Left | Align::Inside);
                    link.set_callback({
                        let s = *sender;
                        let url = url.to_string();
                        move |_| s.send(Message::OpenUrl(url.clone()))
                    });
                    reveal(&link, index, animate);
                }
            }
        }

        self.pack.end();

        // Restart the reading flow at the top of the new document
        self.scroll.scroll_to(0, 0);
        self.scroll.redraw();
    }

    fn build_listing(
        &mut self,
        language: &str,
        code: &str,
        highlighter: &mut SnippetHighlighter,
        palette: &Palette,
        font_size: u32,
        sender: &Sender<Message>,
    ) -> Flex {
        let code_index = self.code_texts.len();
        let line_height = font_size as i32 + 6;
        let body_height = code.lines().count().max(1) as i32 * line_height + 16;

        let mut block = Flex::default().with_size(0, LISTING_HEADER_HEIGHT + body_height);
        block.set_type(FlexType::Column);
        block.set_frame(FrameType::BorderBox);
        block.set_color(palette.surface);
        block.set_spacing(0);

        let mut header = Flex::default();
        header.set_type(FlexType::Row);
        header.set_margin(4);

        let mut lang_label = Frame::default();
        lang_label.set_label(language);
        lang_label.set_label_size(12);
        lang_label.set_label_color(palette.text_secondary);
        lang_label.set_align(Align::Left | Align::Inside);

        let mut copy = Button::default();
        copy.set_label("Copy");
        copy.set_label_size(12);
        copy.set_frame(FrameType::FlatBox);
        copy.set_color(palette.hover);
        copy.set_label_color(palette.text_secondary);
        copy.set_callback({
            let s = *sender;
            move |_| s.send(Message::CopyCode(code_index))
        });
        header.fixed(&copy, 72);
        header.end();
        block.fixed(&header, LISTING_HEADER_HEIGHT);

        let styles = highlighter.highlight(code, language);
        let mut code_buf = TextBuffer::default();
        code_buf.set_text(code);
        let mut style_buf = TextBuffer::default();
        style_buf.set_text(&styles);

        let mut display = TextDisplay::default();
        display.set_buffer(code_buf);
        display.set_highlight_data(style_buf, highlighter.style_table());
        display.set_text_font(Font::Courier);
        display.set_text_size(font_size as i32);
        display.set_color(palette.surface);
        display.set_frame(FrameType::FlatBox);
        display.wrap_mode(WrapMode::None, 0);
        display.set_scrollbar_size(10);

        block.end();

        self.copy_buttons.push(copy);
        self.code_texts.push(code.to_string());

        block
    }
}

/// Hide the widget and show it again after its stagger delay. With
/// animations off the widget is simply left visible.
fn reveal<W: WidgetExt + Clone + 'static>(widget: &W, index: usize, animate: bool) {
    if !animate {
        return;
    }
    let mut widget = widget.clone();
    widget.hide();
    app::add_timeout3(stagger_delay(index), move |_| {
        // The document may have been rebuilt while this timer was pending
        if !widget.was_deleted() {
            widget.show();
            app::redraw();
        }
    });
}

fn chars_per_line(width: i32, font_size: u32) -> usize {
    (width as f32 / (font_size as f32 * 0.52)).max(1.0) as usize
}

/// Estimate how many lines a label needs once wrapped. FLTK wraps at word
/// boundaries; a character-count estimate is close enough to size frames.
fn wrapped_line_count(text: &str, chars_per_line: usize) -> usize {
    text.split('\n')
        .map(|segment| {
            let chars = segment.chars().count();
            (chars.div_ceil(chars_per_line)).max(1)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_line_count_single_line() {
        assert_eq!(wrapped_line_count("short", 80), 1);
        assert_eq!(wrapped_line_count("", 80), 1);
    }

    #[test]
    fn test_wrapped_line_count_wraps_long_text() {
        let text = "x".repeat(200);
        assert_eq!(wrapped_line_count(&text, 80), 3);
    }

    #[test]
    fn test_wrapped_line_count_counts_hard_breaks() {
        assert_eq!(wrapped_line_count("a\nb\nc", 80), 3);
    }

    #[test]
    fn test_chars_per_line_shrinks_with_font_size() {
        assert!(chars_per_line(CONTENT_WIDTH, 20) < chars_per_line(CONTENT_WIDTH, 12));
        assert!(chars_per_line(CONTENT_WIDTH, 16) > 0);
    }
}
