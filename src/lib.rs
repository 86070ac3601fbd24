pub mod engine {
    pub mod utility;
    pub mod element;
    pub mod container;
    pub mod block;

    pub use utility::*;
    pub use element::*;
    pub use container::*;
    pub use block::*;
}

#[cfg(feature = "text-ui")]
pub mod text_ui;
