pub mod use_analyzer;
