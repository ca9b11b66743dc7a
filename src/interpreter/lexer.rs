use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// The kind of a lexical token.
///
/// Keywords are matched exactly and only in upper case; `visible` is an
/// identifier, not the print keyword. Multi-word keywords have no pattern of
/// their own: their words lex as identifiers and [`tokenize`] joins them when
/// they sit on one line separated only by spaces or tabs.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(extras = LexerExtras)]
pub enum TokenKind {
    /// ```text
    /// OBTW multi line
    /// comments TLDR
    /// ```
    #[token("OBTW", skip_block_comment)]
    BlockComment,
    /// `BTW comments.`
    #[regex(r"BTW[^\n]*", logos::skip, allow_greedy = true)]
    LineComment,
    /// End of a line.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    })]
    NewLine,
    /// `,` acts as a soft line break.
    #[token(",")]
    Comma,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,

    /// `HAI`
    #[token("HAI")]
    Hai,
    /// `KTHXBYE`
    #[token("KTHXBYE")]
    Kthxbye,
    /// `WAZZUP`
    #[token("WAZZUP")]
    Wazzup,
    /// `BUHBYE`
    #[token("BUHBYE")]
    Buhbye,
    /// `I HAS A`
    IHasA,
    /// `ITZ`
    #[token("ITZ")]
    Itz,
    /// `R`
    #[token("R", priority = 3)]
    R,
    /// `IS NOW A`
    IsNowA,
    /// `AN`
    #[token("AN")]
    An,
    /// `YR`
    #[token("YR")]
    Yr,
    /// `MKAY`
    #[token("MKAY")]
    Mkay,

    /// `VISIBLE`
    #[token("VISIBLE")]
    Visible,
    /// `!`
    #[token("!")]
    Bang,
    /// `GIMMEH`
    #[token("GIMMEH")]
    Gimmeh,

    /// `SUM OF`
    SumOf,
    /// `DIFF OF`
    DiffOf,
    /// `PRODUKT OF`
    ProduktOf,
    /// `QUOSHUNT OF`
    QuoshuntOf,
    /// `MOD OF`
    ModOf,
    /// `BIGGR OF`
    BiggrOf,
    /// `SMALLR OF`
    SmallrOf,
    /// `BOTH OF`
    BothOf,
    /// `EITHER OF`
    EitherOf,
    /// `WON OF`
    WonOf,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `ALL OF`
    AllOf,
    /// `ANY OF`
    AnyOf,
    /// `BOTH SAEM`
    BothSaem,
    /// `DIFFRINT`
    #[token("DIFFRINT")]
    Diffrint,
    /// `SMOOSH`
    #[token("SMOOSH")]
    Smoosh,
    /// `MAEK`
    #[token("MAEK")]
    Maek,

    /// `O RLY?`
    #[regex(r"O[ \t]+RLY\?")]
    ORly,
    /// `YA RLY`
    YaRly,
    /// `MEBBE`
    #[token("MEBBE")]
    Mebbe,
    /// `NO WAI`
    NoWai,
    /// `OIC`
    #[token("OIC")]
    Oic,
    /// `WTF?`
    #[token("WTF?")]
    Wtf,
    /// `OMG`
    #[token("OMG")]
    Omg,
    /// `OMGWTF`
    #[token("OMGWTF")]
    Omgwtf,
    /// `GTFO`
    #[token("GTFO")]
    Gtfo,

    /// `IM IN YR`
    ImInYr,
    /// `IM OUTTA YR`
    ImOuttaYr,
    /// `UPPIN`
    #[token("UPPIN")]
    Uppin,
    /// `NERFIN`
    #[token("NERFIN")]
    Nerfin,
    /// `TIL`
    #[token("TIL")]
    Til,
    /// `WILE`
    #[token("WILE")]
    Wile,

    /// `HOW IZ I`
    HowIzI,
    /// `IF U SAY SO`
    IfUSaySo,
    /// `FOUND YR`
    FoundYr,
    /// `I IZ`
    IIz,

    /// Quoted YARN literal such as `"HAI WORLD\n"`; escapes are decoded by
    /// the parser.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    Yarn,
    /// NUMBAR literal such as `3.14`, `-.5` or `2e10`.
    #[regex(r"-?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    #[regex(r"-?[0-9]+[eE][+-]?[0-9]+")]
    Numbar,
    /// NUMBR literal such as `42` or `-7`.
    #[regex(r"-?[0-9]+")]
    Numbr,
    /// `WIN` or `FAIL`.
    #[token("WIN")]
    #[token("FAIL")]
    Troof,
    /// `NOOB`, `NUMBR`, `NUMBAR`, `YARN` or `TROOF`.
    #[token("NOOB")]
    #[token("NUMBR")]
    #[token("NUMBAR")]
    #[token("YARN")]
    #[token("TROOF")]
    Type,

    /// Variable, function and loop label names.
    #[regex(r"[A-Za-z][A-Za-z0-9_]*")]
    Identifier,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset at which the current line starts.
    pub line_start: usize,
}

/// A classified token with its source position.
///
/// `line` and `col` are 1-based; the column counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind:   TokenKind,
    /// The source text, with multi-word keyword spacing collapsed.
    pub lexeme: String,
    /// Line of the first character.
    pub line:   usize,
    /// Column of the first character.
    pub col:    usize,
}

/// Skips an `OBTW ... TLDR` comment, keeping the line counter in sync.
///
/// Returns `false` (a lexical error) when the comment is never closed.
fn skip_block_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::FilterResult<(), ()> {
    let Some(end) = lex.remainder().find("TLDR") else {
        return logos::FilterResult::Error(());
    };
    let start = lex.span().end;
    let body = &lex.remainder()[..end];
    if let Some(last) = body.rfind('\n') {
        lex.extras.line += body.matches('\n').count();
        lex.extras.line_start = start + last + 1;
    }
    lex.bump(end + "TLDR".len());
    logos::FilterResult::Skip
}

impl TokenKind {
    /// Human readable classification used by token tables.
    ///
    /// # Example
    /// ```
    /// use lolterpreter::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::SumOf.classification(), "Arithmetic Operator");
    /// assert_eq!(TokenKind::Identifier.classification(), "Identifier");
    /// ```
    #[must_use]
    pub const fn classification(self) -> &'static str {
        match self {
            Self::Hai | Self::Kthxbye => "Code Delimiter",
            Self::Wazzup | Self::Buhbye => "Variable List Delimiter",
            Self::IHasA => "Variable Declaration",
            Self::Itz => "Variable Initialization",
            Self::R => "Assignment Operator",
            Self::IsNowA | Self::Maek => "Typecast Operator",
            Self::An => "Operand Separator",
            Self::Yr => "Parameter Marker",
            Self::Mkay => "Variadic Terminator",
            Self::Visible => "Output Keyword",
            Self::Bang => "Newline Suppressor",
            Self::Gimmeh => "Input Keyword",
            Self::SumOf
            | Self::DiffOf
            | Self::ProduktOf
            | Self::QuoshuntOf
            | Self::ModOf
            | Self::BiggrOf
            | Self::SmallrOf => "Arithmetic Operator",
            Self::BothOf
            | Self::EitherOf
            | Self::WonOf
            | Self::Not
            | Self::AllOf
            | Self::AnyOf => "Boolean Operator",
            Self::BothSaem | Self::Diffrint => "Comparison Operator",
            Self::Smoosh => "Concatenation Operator",
            Self::ORly | Self::YaRly | Self::Mebbe | Self::NoWai => "Conditional Keyword",
            Self::Wtf | Self::Omg | Self::Omgwtf => "Switch Keyword",
            Self::Oic => "Block Terminator",
            Self::Gtfo => "Break Keyword",
            Self::ImInYr
            | Self::ImOuttaYr
            | Self::Uppin
            | Self::Nerfin
            | Self::Til
            | Self::Wile => "Loop Keyword",
            Self::HowIzI | Self::IfUSaySo | Self::FoundYr | Self::IIz => "Function Keyword",
            Self::Yarn => "String Literal",
            Self::Numbar => "Float Literal",
            Self::Numbr => "Integer Literal",
            Self::Troof => "Boolean Literal",
            Self::Type => "Type Literal",
            Self::Identifier => "Identifier",
            Self::NewLine | Self::Comma => "Statement Separator",
            Self::BlockComment | Self::LineComment | Self::Ignored => "Ignored",
        }
    }

    /// How the token kind reads in an error message.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Hai => "'HAI'",
            Self::Kthxbye => "'KTHXBYE'",
            Self::Wazzup => "'WAZZUP'",
            Self::Buhbye => "'BUHBYE'",
            Self::IHasA => "'I HAS A'",
            Self::Itz => "'ITZ'",
            Self::R => "'R'",
            Self::IsNowA => "'IS NOW A'",
            Self::An => "'AN'",
            Self::Yr => "'YR'",
            Self::Mkay => "'MKAY'",
            Self::Visible => "'VISIBLE'",
            Self::Bang => "'!'",
            Self::Gimmeh => "'GIMMEH'",
            Self::SumOf => "'SUM OF'",
            Self::DiffOf => "'DIFF OF'",
            Self::ProduktOf => "'PRODUKT OF'",
            Self::QuoshuntOf => "'QUOSHUNT OF'",
            Self::ModOf => "'MOD OF'",
            Self::BiggrOf => "'BIGGR OF'",
            Self::SmallrOf => "'SMALLR OF'",
            Self::BothOf => "'BOTH OF'",
            Self::EitherOf => "'EITHER OF'",
            Self::WonOf => "'WON OF'",
            Self::Not => "'NOT'",
            Self::AllOf => "'ALL OF'",
            Self::AnyOf => "'ANY OF'",
            Self::BothSaem => "'BOTH SAEM'",
            Self::Diffrint => "'DIFFRINT'",
            Self::Smoosh => "'SMOOSH'",
            Self::Maek => "'MAEK'",
            Self::ORly => "'O RLY?'",
            Self::YaRly => "'YA RLY'",
            Self::Mebbe => "'MEBBE'",
            Self::NoWai => "'NO WAI'",
            Self::Oic => "'OIC'",
            Self::Wtf => "'WTF?'",
            Self::Omg => "'OMG'",
            Self::Omgwtf => "'OMGWTF'",
            Self::Gtfo => "'GTFO'",
            Self::ImInYr => "'IM IN YR'",
            Self::ImOuttaYr => "'IM OUTTA YR'",
            Self::Uppin => "'UPPIN'",
            Self::Nerfin => "'NERFIN'",
            Self::Til => "'TIL'",
            Self::Wile => "'WILE'",
            Self::HowIzI => "'HOW IZ I'",
            Self::IfUSaySo => "'IF U SAY SO'",
            Self::FoundYr => "'FOUND YR'",
            Self::IIz => "'I IZ'",
            Self::Yarn => "string literal",
            Self::Numbar => "float literal",
            Self::Numbr => "integer literal",
            Self::Troof => "boolean literal",
            Self::Type => "type name",
            Self::Identifier => "identifier",
            Self::NewLine => "newline",
            Self::Comma => "','",
            Self::BlockComment | Self::LineComment | Self::Ignored => "comment",
        }
    }
}

/// Converts raw source text into its full token sequence.
///
/// Line endings are normalized to `\n` first. Lexing stops at the first
/// character that no rule accepts; there is no partial output.
///
/// # Example
/// ```
/// use lolterpreter::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("VISIBLE SUM   OF 1 AN 2").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Visible,
///             TokenKind::SumOf,
///             TokenKind::Numbr,
///             TokenKind::An,
///             TokenKind::Numbr]);
/// assert_eq!(tokens[1].lexeme, "SUM OF");
/// assert_eq!(tokens[2].col, 18);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let source = normalize_line_endings(source);
    let mut words = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(&source,
                                                 LexerExtras { line:       1,
                                                               line_start: 0, });

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        let line = lexer.extras.line;
        let line_start = lexer.extras.line_start;

        let Ok(kind) = kind else {
            return Err(LexError { found: lexer.slice().chars().take(10).collect(),
                                  line,
                                  col: column(&source, line_start, span.start),
                                  context: context_window(&source, span.start) });
        };

        let (line, line_start) = if kind == TokenKind::NewLine {
            // The callback already advanced the counters past this newline.
            (line - 1, source[..span.start].rfind('\n').map_or(0, |i| i + 1))
        } else {
            (line, line_start)
        };

        let token = Token { kind,
                            lexeme: lexer.slice().to_string(),
                            line,
                            col: column(&source, line_start, span.start) };
        log::trace!("lexed {:?} {:?} at {}:{}", token.kind, token.lexeme, token.line, token.col);
        words.push((token, span));
    }

    let tokens = join_phrases(&source, words);
    log::debug!("lexed {} tokens", tokens.len());
    Ok(tokens)
}

/// Keywords spelled with more than one word.
const PHRASES: &[(TokenKind, &[&str])] = &[(TokenKind::IHasA, &["I", "HAS", "A"]),
                                           (TokenKind::IsNowA, &["IS", "NOW", "A"]),
                                           (TokenKind::SumOf, &["SUM", "OF"]),
                                           (TokenKind::DiffOf, &["DIFF", "OF"]),
                                           (TokenKind::ProduktOf, &["PRODUKT", "OF"]),
                                           (TokenKind::QuoshuntOf, &["QUOSHUNT", "OF"]),
                                           (TokenKind::ModOf, &["MOD", "OF"]),
                                           (TokenKind::BiggrOf, &["BIGGR", "OF"]),
                                           (TokenKind::SmallrOf, &["SMALLR", "OF"]),
                                           (TokenKind::BothOf, &["BOTH", "OF"]),
                                           (TokenKind::EitherOf, &["EITHER", "OF"]),
                                           (TokenKind::WonOf, &["WON", "OF"]),
                                           (TokenKind::AllOf, &["ALL", "OF"]),
                                           (TokenKind::AnyOf, &["ANY", "OF"]),
                                           (TokenKind::BothSaem, &["BOTH", "SAEM"]),
                                           (TokenKind::YaRly, &["YA", "RLY"]),
                                           (TokenKind::NoWai, &["NO", "WAI"]),
                                           (TokenKind::ImInYr, &["IM", "IN", "YR"]),
                                           (TokenKind::ImOuttaYr, &["IM", "OUTTA", "YR"]),
                                           (TokenKind::HowIzI, &["HOW", "IZ", "I"]),
                                           (TokenKind::IfUSaySo, &["IF", "U", "SAY", "SO"]),
                                           (TokenKind::FoundYr, &["FOUND", "YR"]),
                                           (TokenKind::IIz, &["I", "IZ"])];

/// Joins runs of words that spell a multi-word keyword into one token.
///
/// The words must be whole tokens on one line with only spaces or tabs
/// between them, so `SUM OFFSET` stays two identifiers.
fn join_phrases(source: &str, words: Vec<(Token, Range<usize>)>) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(words.len());
    let mut rest = words.as_slice();

    while let Some((first, _)) = rest.first() {
        if let Some(&(kind, phrase)) = PHRASES.iter().find(|(_, phrase)| spells(source, rest, phrase)) {
            log::trace!("joined {phrase:?} at {}:{}", first.line, first.col);
            tokens.push(Token { kind,
                                lexeme: phrase.join(" "),
                                line: first.line,
                                col: first.col });
            rest = &rest[phrase.len()..];
        } else {
            tokens.push(first.clone());
            rest = &rest[1..];
        }
    }

    tokens
}

fn spells(source: &str, words: &[(Token, Range<usize>)], phrase: &[&str]) -> bool {
    let Some(words) = words.get(..phrase.len()) else {
        return false;
    };
    let is_word = |(token, _): &(Token, Range<usize>), word: &&str| {
        matches!(token.kind, TokenKind::Identifier | TokenKind::Yr) && token.lexeme == *word
    };
    let same_line = |pair: &[(Token, Range<usize>)]| {
        source[pair[0].1.end..pair[1].1.start].chars().all(|c| c == ' ' || c == '\t')
    };

    words.iter().zip(phrase).all(|(token, word)| is_word(token, word)) && words.windows(2).all(same_line)
}

fn normalize_line_endings(source: &str) -> String {
    source.trim_start_matches('\u{feff}')
          .replace("\r\n", "\n")
          .replace(['\r', '\u{2028}', '\u{2029}'], "\n")
}

fn column(source: &str, line_start: usize, offset: usize) -> usize {
    source[line_start..offset].chars().count() + 1
}

/// Up to 10 characters before and 30 after `offset`.
fn context_window(source: &str, offset: usize) -> String {
    let before: Vec<char> = source[..offset].chars().rev().take(10).collect();
    let mut window: String = before.into_iter().rev().collect();
    window.extend(source[offset..].chars().take(30));
    window
}
