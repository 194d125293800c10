/*
 * 引擎核心库入口
 *
 * - board: 局面（棋盘 + 走棋方）、走法生成、静态评估、终局判定
 * - search: 固定深度 minimax 与最佳后继选择
 * - constant: 棋盘尺寸、搜索深度等常量
 * - engine: 基于标准输入输出的文本协议
 */
pub mod board;
pub mod constant;
pub mod engine;
pub mod search;
