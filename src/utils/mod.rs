//! Miscellaneous components used in the library.

mod argument_bitset;
pub use argument_bitset::ArgumentBitSet;

mod framework_index;
pub use framework_index::FrameworkIndex;

mod grounded_labelling;
pub use grounded_labelling::grounded_extension;
pub use grounded_labelling::grounded_labelling;
pub use grounded_labelling::GroundedLabelling;
pub use grounded_labelling::Label;
