use crate::lexc::LexiconName;

const BLOCK_WIDTH: usize = 80;
const TEXT_COLUMN: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("Lexicon name {0} does not match any comment pattern")]
    UnknownPattern(String),
}

/// Human readable description of a generated sublexicon, one line per item.
pub fn comment(name: &LexiconName) -> Result<Vec<String>, CommentError> {
    let paradigm = |p: &str| format!("Paradigm: {}", p);
    let class = |p: &str, c: &str| format!("Paradigm: {}, Class: {}", p, c);

    let lines = match name {
        LexiconName::Prefix { paradigm: p } => vec![paradigm(p), "Prefixes".into()],
        LexiconName::PrefixBoundary { paradigm: p } => vec![
            paradigm(p),
            "Morpheme boundary between prefix and stem".into(),
        ],
        LexiconName::PreElementGate { pos } => vec![
            format!("Part of speech: {}", pos),
            "Pre-verbs/nouns".into(),
        ],
        LexiconName::Stems { paradigm: p } => vec![paradigm(p), "Stems".into()],
        LexiconName::ClassBoundary { paradigm: p, class: c } => vec![
            class(p, c),
            "Morpheme boundary between stem and suffix".into(),
        ],
        LexiconName::ClassFlags { paradigm: p, class: c } => vec![
            class(p, c),
            "Flag diacritic governing combinations between".into(),
            "prefix and ending".into(),
        ],
        LexiconName::Order(key) => vec![format!(
            "Paradigm: {}, Class: {}, Prefix: {}, Order: {}",
            key.paradigm, key.class, key.prefix, key.order
        )],
        LexiconName::Endings(key) => vec![
            format!(
                "Paradigm: {}, Class: {}, Prefix: {}, Order: {}",
                key.paradigm, key.class, key.prefix, key.order
            ),
            "Endings".into(),
        ],
        LexiconName::Irregular { paradigm: p } => vec![paradigm(p), "Irregular forms".into()],
        LexiconName::Root(_) | LexiconName::External(_) | LexiconName::Terminal => {
            return Err(CommentError::UnknownPattern(name.to_string()))
        }
    };

    Ok(lines)
}

/// The comment framed in a box of `!`, text starting at column 10.
pub fn comment_block(name: &LexiconName) -> Result<String, CommentError> {
    let border = "!".repeat(BLOCK_WIDTH);
    let blank = format!("!{}!", " ".repeat(BLOCK_WIDTH - 2));

    let mut block = vec![border.clone(), blank.clone()];
    block.extend(comment(name)?.iter().map(|line| framed(line)));
    block.push(blank);
    block.push(border);

    Ok(block.join("\n"))
}

// Overwrites the blank line from TEXT_COLUMN on; long text runs past the
// right border.
fn framed(text: &str) -> String {
    let mut line: Vec<char> = "!".chars().chain(std::iter::repeat(' ').take(BLOCK_WIDTH - 2)).collect();
    line.push('!');

    let text: Vec<char> = text.chars().collect();
    let end = (TEXT_COLUMN + text.len()).min(line.len());
    line.splice(TEXT_COLUMN..end, text);
    line.into_iter().collect()
}
