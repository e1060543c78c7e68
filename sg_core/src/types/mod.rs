pub mod generation_kind;
