//! Override forwarding engine for modforward.
//!
//! Given a load order, a set of base modules and a user-ranked list of
//! preferred modules, the engine works out which records should end up in
//! effect and writes the ones that are not into a patch module.
//!
//! # Pipeline
//!
//! 1. **Index**: one [`RecordIndex`] per base module maps editor ids to
//!    canonical records.
//! 2. **Scan**: [`scanner::scan`] reports records from non-base modules that
//!    share an editor id with a base record. Informational only.
//! 3. **Resolve**: [`resolver::resolve`] picks one winner per editor id from
//!    the preferred override order; unlisted modules never win.
//! 4. **Filter**: [`filter::filter`] drops winners the load order already
//!    resolves to, using a [`ResolvedView`] such as [`LinkCache`].
//! 5. **Emit**: [`emitter::emit`] deep-copies the survivors into the patch.
//!
//! [`report`] formats stages 2 and 4 for humans. [`Patcher`] runs the whole
//! thing for spell tomes and spells.
//!
//! # Example
//!
//! ```
//! use modforward_engine::{LinkCache, PatchSettings, Patcher};
//! use modforward_model::{LoadOrder, Module};
//! use modforward_types::ModKey;
//!
//! let skyrim = Module::new(ModKey::parse("Skyrim.esm").unwrap());
//! let load_order = LoadOrder::from_modules([skyrim]).unwrap();
//! let settings = PatchSettings::default();
//!
//! let mut patch = Module::new(ModKey::parse("Patch.esp").unwrap());
//! let mut report = Vec::<u8>::new();
//! let summary = Patcher::new(&settings)
//!     .run(&load_order, &LinkCache::new(&load_order), &mut patch, &mut report)
//!     .unwrap();
//! assert_eq!(summary.forwarded(), 0);
//! ```

mod base;
pub mod emitter;
mod error;
pub mod filter;
mod index;
mod patcher;
pub mod report;
pub mod resolver;
pub mod scanner;
mod settings;
mod view;

pub use base::BaseSet;
pub use error::{EngineError, EngineResult};
pub use index::RecordIndex;
pub use patcher::{PatchSummary, Patcher};
pub use resolver::{Winners, WinningOverride};
pub use scanner::OverridePair;
pub use settings::{DEFAULT_BASE_MODS, MASTER_BASE_MOD, PatchSettings};
pub use view::{LinkCache, ResolvedView};
