//! 工具模块 - 日志等通用工具

pub mod logger;
