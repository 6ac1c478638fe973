//! memdemo: a terminal slideshow for a talk about .NET garbage
//! collection inside Docker containers.
//!
//! The deck is hardcoded (`deck`), each slide knows how to play itself
//! (`slide`), text is typed out character by character (`typing`), code
//! blocks get a keyword coloring overlay (`highlight`), live demo
//! commands run through a process seam (`runner`), and a small key-driven
//! loop navigates it all (`state`, `input`, `show`).

pub mod constants;
pub mod deck;
pub mod highlight;
pub mod input;
pub mod runner;
pub mod show;
pub mod slide;
pub mod state;
pub mod typing;
