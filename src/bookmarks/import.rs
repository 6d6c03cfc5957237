//! Import of browser-exported bookmark files (the Netscape bookmark HTML
//! format every major browser writes) into a [`Dataset`].
//!
//! Folder headings (`<H3>`) become the current folder path once the
//! following `<DL>` opens, and `</DL>` leaves it again. Every `<A HREF>`
//! is filed under the group named by the folder path joined with `" / "`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use super::{Dataset, Group, Link, DEFAULT_TITLE};

/// Group used for links that sit outside every folder
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Name given to a folder heading with no text
pub const UNTITLED_FOLDER: &str = "Untitled folder";

/// Description written into imported datasets
pub const IMPORTED_DESCRIPTION: &str = "Imported from browser bookmarks";

/// Separator between nested folder names in a group name
const PATH_SEPARATOR: &str = " / ";

/// A link together with the folder path it was found under
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    path: Vec<String>,
    link: Link,
}

/// Token sink tracking the folder stack while the tokenizer walks the file
#[derive(Default)]
struct BookmarkSink {
    stack: Vec<String>,
    pending_folder: Option<String>,
    in_heading: bool,
    in_anchor: bool,
    text: String,
    current_url: Option<String>,
    entries: Vec<Entry>,
}

impl BookmarkSink {
    fn start_tag(&mut self, tag: &Tag) {
        match &*tag.name {
            "h3" => {
                self.in_heading = true;
                self.text.clear();
            }
            "a" => {
                self.in_anchor = true;
                self.text.clear();
                let href = tag
                    .attrs
                    .iter()
                    .find(|attr| &*attr.name.local == "href")
                    .map(|attr| attr.value.trim().to_string())
                    .unwrap_or_default();
                self.current_url = Some(href);
            }
            "dl" => {
                if let Some(folder) = self.pending_folder.take() {
                    self.stack.push(folder);
                }
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: &Tag) {
        match &*tag.name {
            "h3" => {
                self.in_heading = false;
                let name = clean_text(&self.text);
                self.pending_folder = Some(if name.is_empty() {
                    UNTITLED_FOLDER.to_string()
                } else {
                    name
                });
                self.text.clear();
            }
            "a" => {
                self.in_anchor = false;
                if let Some(url) = self.current_url.take() {
                    let title = clean_text(&self.text);
                    let mut link = Link::new(url);
                    if !title.is_empty() {
                        link.title = Some(title);
                    }
                    self.entries.push(Entry {
                        path: self.stack.clone(),
                        link,
                    });
                }
                self.text.clear();
            }
            "dl" => {
                self.stack.pop();
            }
            _ => {}
        }
    }

    fn characters(&mut self, chars: &StrTendril) {
        if self.in_heading || self.in_anchor {
            self.text.push_str(chars);
        }
    }
}

impl TokenSink for BookmarkSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => self.start_tag(&tag),
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(chars) => self.characters(&chars),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Collapse runs of whitespace into single spaces and trim the ends
fn clean_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn tokenize(html: &str) -> Vec<Entry> {
    let mut input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let mut tokenizer = Tokenizer::new(BookmarkSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink.entries
}

/// Group entries by folder path, keeping first-seen group order
fn build_groups(entries: Vec<Entry>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for entry in entries {
        let name = if entry.path.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            entry.path.join(PATH_SEPARATOR)
        };
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.links.push(entry.link),
            None => groups.push(Group::new(name, vec![entry.link])),
        }
    }
    groups
}

/// Parse bookmark HTML into a dataset
pub fn parse_bookmarks_html(html: &str) -> Dataset {
    Dataset {
        title: Some(DEFAULT_TITLE.to_string()),
        description: Some(IMPORTED_DESCRIPTION.to_string()),
        groups: build_groups(tokenize(html)),
    }
}

/// Read a bookmark export and write `data.json` into `out_dir`.
///
/// Returns the written path and the dataset that was written.
pub fn import_file(source: &Path, out_dir: &Path) -> Result<(PathBuf, Dataset)> {
    let bytes = std::fs::read(source)
        .with_context(|| format!("Failed to read bookmark file: {}", source.display()))?;
    let html = String::from_utf8_lossy(&bytes);
    let dataset = parse_bookmarks_html(&html);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let path = out_dir.join(super::loader::DEFAULT_DATA_FILE);
    let contents = serde_json::to_string_pretty(&dataset).context("Failed to serialize dataset")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("Failed to write data file: {}", path.display()))?;

    tracing::info!(
        source = %source.display(),
        output = %path.display(),
        groups = dataset.groups.len(),
        links = dataset.link_count(),
        "imported bookmarks"
    );

    Ok((path, dataset))
}
