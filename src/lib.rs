// 媒体目录搜索后端库
//
// 本库提供目录浏览的核心功能，包括：
// - 内容模型与搜索条件
// - 内存内容仓库与谓词构建
// - 可取消的后台搜索执行器
// - API 路由

pub mod api;
pub mod config;
pub mod database;
pub mod models;
pub mod services;
