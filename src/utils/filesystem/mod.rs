pub mod explore;

pub use explore::FragmentExplorer;
