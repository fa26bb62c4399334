//! Transformation passes
//!
//! Each pass mutates a parsed file in place, visiting declarations children-first
//! through [`Declaration::walk`](crate::java::ast::Declaration::walk). A run applies one
//! pass; the composer then renders the result.
//!
//! | Pass         | Effect                                                        |
//! |--------------|---------------------------------------------------------------|
//! | `sort`       | Reorder members by category, then quasinumeric name           |
//! | `visibility` | Insert a default access modifier where none is declared       |
//! | `comments`   | Uppercase the first letter of each comment block              |
//! | `cases`      | Sort arrow-style switch case groups and multi-label cases     |

pub mod cases;
pub mod comments;
pub mod visibility;

use crate::java::ast::error::SortError;
use crate::java::ast::SourceFile;
use crate::java::sorting::SortOptions;
pub use visibility::{UnknownVisibility, Visibility};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pass {
    Sort(SortOptions),
    Visibility(Visibility),
    Comments,
    Cases,
}

impl Pass {
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Sort(_) => "sort",
            Pass::Visibility(_) => "visibility",
            Pass::Comments => "comments",
            Pass::Cases => "cases",
        }
    }

    /// Apply the pass to a parsed file. Only sorting can fail.
    pub fn apply(&self, file: &mut SourceFile) -> Result<(), SortError> {
        match self {
            Pass::Sort(options) => file.root.sort(options),
            Pass::Visibility(default) => {
                visibility::normalize(file, *default);
                Ok(())
            }
            Pass::Comments => {
                comments::normalize(file);
                Ok(())
            }
            Pass::Cases => {
                cases::normalize(file);
                Ok(())
            }
        }
    }
}
