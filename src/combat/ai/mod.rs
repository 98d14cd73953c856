//! Combat domain: AI decision-making.

pub mod boss;
