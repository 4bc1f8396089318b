//! Темп игры: сколько компьютер "думает" перед своим ходом.
//!
//! Задержка чисто косметическая. В headless-режиме и тестах её можно обнулить.

pub mod think_time;

pub use think_time::{ThinkProfile, ThinkTime};
