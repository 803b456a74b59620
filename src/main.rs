//! kanari - 日本語エンコーディング推定のデモドライバ
//!
//! ファイル (引数省略時は標準入力) をチャンク単位で読み、
//! Shift-JIS / EUC-JP それぞれの解析器に与えて確信度を表示します。

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::process;

use kanari::config::load_config;
use kanari::{AnalyzerConfig, Confidence, ContextAnalysis, EucJpOrder, ShiftJisOrder};

fn main() {
    // ロギング初期化 (既定は warn 以上のみ)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    // 第2引数で設定ファイルを指定できる (なければ既定値)
    let config = match args.get(2) {
        Some(path) => load_config(Path::new(path)),
        None => AnalyzerConfig::default(),
    };

    if let Err(e) = run(args.get(1).map(String::as_str), config) {
        log::error!("入力の読み取りに失敗: {}", e);
        eprintln!("エラー: {}", e);
        process::exit(1);
    }
}

fn run(input: Option<&str>, config: AnalyzerConfig) -> io::Result<()> {
    let mut reader: Box<dyn Read> = match input {
        None | Some("-") => Box::new(io::stdin().lock()),
        Some(path) => Box::new(File::open(path)?),
    };

    let mut sjis = ContextAnalysis::with_config(ShiftJisOrder, config);
    let mut eucjp = ContextAnalysis::with_config(EucJpOrder, config);

    let mut buf = [0u8; 4096];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        sjis.handle_data(&buf[..n]);
        eucjp.handle_data(&buf[..n]);
    }

    report(sjis.encoding_name(), sjis.confidence());
    report(eucjp.encoding_name(), eucjp.confidence());

    // 数値スコアを持つものだけを比較する (データ不足は対象外)
    let candidates = [
        (sjis.encoding_name(), sjis.confidence()),
        (eucjp.encoding_name(), eucjp.confidence()),
    ];
    let best = candidates
        .iter()
        .filter_map(|&(name, c)| c.score().map(|s| (name, s)))
        .max_by(|a, b| a.1.total_cmp(&b.1));

    match best {
        Some((name, score)) => println!("推定: {} ({:.3})", name, score),
        None => println!("推定: 観測数不足のため判定不能"),
    }
    Ok(())
}

fn report(name: &str, confidence: Confidence) {
    match confidence {
        Confidence::Score(score) => println!("{:10} 確信度 {:.3}", name, score),
        Confidence::InsufficientData => println!("{:10} 観測数不足", name),
    }
}
