//! Session lifecycle and protected navigation.
//!
//! DESIGN
//! ======
//! The session store ([`session::Session`]) is the single owner of the
//! bearer token and the resolved user identity. The route guard
//! ([`guard`]) makes a pure three-way decision per navigation and records
//! the attempted path for post-login resume. Token persistence is isolated
//! in [`storage`] so nothing else touches `localStorage`.

pub mod guard;
pub mod session;
pub mod storage;
