//! C++ stub rendering backend for AI query class generation.
//!
//! Given a resolved [`QueryClass`], this crate renders the two artifacts of
//! the fixed class template — a header declaring the query class and a
//! translation unit with its constructor, destructor, stubbed `doQuery`,
//! and both parameter-loading method bodies — and writes them to disk.
//!
//! Rendering is pure and deterministic: the same class model always yields
//! the same bytes. All text goes through [`writer::SourceWriter`], so the
//! two renderers share one indentation convention.
//!
//! # Example
//!
//! ```
//! use querygen_backend_cpp::{render_declaration, QueryClass};
//! use querygen_def::AiDef;
//!
//! let def = AiDef::from_yaml_str(
//!     "Querys:\n  doSomething:\n    DynamicInstParams:\n      - {Name: Target, Type: Int}\n",
//! )
//! .unwrap();
//!
//! let class = QueryClass::resolve("DoSomething", &def.querys["doSomething"]).unwrap();
//! let header = render_declaration(&class);
//! assert!(header.contains("class DoSomething : public ksys::act::ai::Query {"));
//! assert!(header.contains("int* mTarget{};"));
//! ```

pub mod decl;
pub mod defn;
pub mod error;
pub mod generate;
pub mod model;
pub mod writer;

pub use decl::render_declaration;
pub use defn::render_definition;
pub use error::StubError;
pub use generate::{write_query_stubs, StubPair};
pub use model::{Member, QueryClass};
