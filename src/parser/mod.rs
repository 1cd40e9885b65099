mod alternative;
mod ambiguity;
mod api;
mod combinators;
mod error;
mod extras;
mod left_rec;
mod outcome;
mod primitives;
mod recovery;
mod repetition;
mod rule;
mod sequence;
mod state;
mod trace;

pub use alternative::*;
pub use ambiguity::*;
pub use api::*;
pub use combinators::*;
pub use error::*;
pub use extras::*;
pub use left_rec::*;
pub use outcome::*;
pub use primitives::*;
pub use recovery::*;
pub use repetition::*;
pub use rule::*;
pub use sequence::*;
pub use state::*;
pub use trace::*;
