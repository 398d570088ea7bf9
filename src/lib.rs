//! # escapefn
//!
//! Bidirectional codec between two representations of filename lists:
//!
//! - the **raw** form: a NUL-separated byte stream, as produced by tools
//!   that enumerate filesystem entries without ambiguity (`find -print0`,
//!   `ls --zero`, ...);
//! - the **escaped** form: line-oriented text where each filename occupies
//!   one LF-terminated line, with embedded separators, backslashes and
//!   (optionally) control characters rendered as backslash escapes.
//!
//! Both directions are single-pass, byte-oriented stream transducers with
//! O(1) auxiliary memory. Filenames are treated purely as bytes; no text
//! encoding is assumed.
//!
//! ## Escaping modes
//!
//! The escaper supports three verbosity levels:
//!
//! ```text
//! byte           minimum    c style    octal
//! NUL  (0x00)    LF         LF         LF
//! LF   (0x0A)    \n         \n         \012
//! \    (0x5C)    \\         \\         \\
//! BEL  (0x07)    literal    \a         \007
//! other C0, DEL  literal    \ooo       \ooo
//! anything else  literal    literal    literal
//! ```
//!
//! NUL always becomes a literal LF (the record separator) regardless of
//! mode. Octal mode renders literal LF bytes inside a name as `\012` so
//! that an octal-aware scanner can never confuse them with the separator.
//!
//! ## Unescaping
//!
//! The unescaper is mode independent: it accepts everything any mode
//! emits, plus the remaining C-style graphic escapes (`\?` `\'` `\"`) and
//! the GNU coreutils `ls -b` aliases (`\ ` `\=` `\>` `\@` `\|`).
//! Malformed escapes are decoded best-effort with a warning and never
//! abort the stream.
//!
//! ## Example
//!
//! ```
//! use escapefn::{Escaper, Mode, Unescaper};
//!
//! let raw = b"a\nb\0c\\d\0";
//! let mut escaped = Vec::new();
//! Escaper::new(Mode::Minimum).escape(&raw[..], &mut escaped);
//! assert_eq!(escaped, b"a\\nb\nc\\\\d\n");
//!
//! let mut restored = Vec::new();
//! Unescaper::new().unescape(&escaped[..], &mut restored);
//! assert_eq!(restored, raw);
//! ```

pub mod escaper;
pub mod stream;
pub mod unescaper;

pub use escaper::{Escaper, Mode};
pub use stream::{ByteSource, Status};
pub use unescaper::Unescaper;
