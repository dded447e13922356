use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "german-vocab")]
#[command(about = "German vocabulary collector: dictionary lookup into a colour-coded Excel workbook", long_about = None)]
pub struct Cli {
    /// サブコマンド省略時は対話モード
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ワークブックのパス（設定ファイルより優先）
    #[arg(long, global = true)]
    pub workbook: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話的に単語を登録（デフォルト）
    Add,

    /// シート一覧、またはシートの内容を表示
    List {
        /// シート名（例: General, der, Verbs, Lesson-3）
        sheet: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のワークブックパスを設定
        #[arg(long)]
        set_workbook: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
