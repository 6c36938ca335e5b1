//! Trait definitions (hexagonal ports) and the records they carry.
//! Ports depend only on the domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       Application       │
//!                 │  cache · orchestrator   │
//!                 └───────────┬─────────────┘
//!       ┌───────────────┬─────┴─────────┬───────────────┐
//!       ▼               ▼               ▼               ▼
//!  ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌───────────┐
//!  │ItemSource│   │ KV Store  │   │  Clock   │   │ Presenter │
//!  └──────────┘   └───────────┘   └──────────┘   └───────────┘
//! ```

pub mod outbound;
