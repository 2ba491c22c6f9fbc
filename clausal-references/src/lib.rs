//! External reference extraction for contract documents.
//!
//! [`ReferenceExtractor`] finds URLs, email addresses, bare domains, and
//! standard/section citations in document text, in layered passes that
//! cannot double-count overlapping matches: each regex pass blanks the
//! spans it consumed before the next pass runs, and the citation pass
//! works off the POS-tagged tokens via the `clausal` chunk grammar.
//!
//! Results are deduplicated document-wide by `(form, kind)` and any form
//! that merely repeats a known party name is dropped.
//!
//! ```
//! use clausal_references::{ReferenceExtractor, ReferenceKind};
//!
//! let extractor = ReferenceExtractor::new(
//!     vec!["Contact support@apple.com for help.".to_string()],
//!     vec![],
//!     vec![],
//! )
//! .unwrap();
//! let references = extractor.analyze();
//! assert_eq!(references.len(), 1);
//! assert_eq!(references[0].kind, ReferenceKind::Email);
//! ```

mod extractor;

pub use extractor::{Reference, ReferenceExtractor, ReferenceKind};
