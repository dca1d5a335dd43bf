//! Helpers over an editor view
//!
//! The editor host is reached only through the [`View`] trait; [`TextView`]
//! is the in-memory implementation used for buffers that are not open in
//! the editor.

/// Character range `[begin, end)` in a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub begin: usize,
    pub end: usize,
}

impl Region {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }
}

/// What the plugin needs from an editor view
pub trait View {
    /// Path of the file backing the view, if it has been saved
    fn file_name(&self) -> Option<String>;

    /// Number of characters in the view
    fn size(&self) -> usize;

    /// Text covered by `region`
    fn substr(&self, region: Region) -> String;

    /// Zero-based (row, column) of a character offset
    fn rowcol(&self, point: usize) -> (usize, usize);
}

/// File name, line count and content of a view
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub file_name: Option<String>,
    pub lines: usize,
    pub content: String,
}

pub fn get_content(view: &dyn View) -> String {
    view.substr(Region::new(0, view.size()))
}

/// Row index of the end of the buffer
pub fn get_lines(view: &dyn View) -> usize {
    view.rowcol(view.size()).0
}

pub fn get_file_infos(view: &dyn View) -> FileInfo {
    FileInfo {
        file_name: view.file_name(),
        lines: get_lines(view),
        content: get_content(view),
    }
}

/// Whether the view holds a TypeScript file
pub fn is_ts(view: Option<&dyn View>) -> bool {
    view.and_then(|v| v.file_name())
        .is_some_and(|name| name.ends_with(".ts"))
}

/// Whether the view holds a TypeScript declaration file
pub fn is_dts(view: Option<&dyn View>) -> bool {
    view.and_then(|v| v.file_name())
        .is_some_and(|name| name.ends_with(".d.ts"))
}

/// In-memory view
#[derive(Debug, Clone, Default)]
pub struct TextView {
    file_name: Option<String>,
    text: String,
}

impl TextView {
    pub fn new(file_name: Option<&str>, text: &str) -> Self {
        Self {
            file_name: file_name.map(str::to_string),
            text: text.to_string(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl View for TextView {
    fn file_name(&self) -> Option<String> {
        self.file_name.clone()
    }

    fn size(&self) -> usize {
        self.text.chars().count()
    }

    fn substr(&self, region: Region) -> String {
        let len = region.end.saturating_sub(region.begin);
        self.text.chars().skip(region.begin).take(len).collect()
    }

    fn rowcol(&self, point: usize) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for ch in self.text.chars().take(point) {
            if ch == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }
}
