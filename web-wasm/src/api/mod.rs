//! 外部APIクライアント

pub mod gemini;
