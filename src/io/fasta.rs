use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// 一条 FASTA 记录；序列已去掉空白并转为大写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

/// 逐条读取 FASTA；第一个 `>` 之前的行被忽略
pub struct FastaReader<R: BufRead> {
    reader: R,
    line: String,
    pending: Option<String>,
    finished: bool,
}

fn split_header(header: &str) -> (String, Option<String>) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, rest)) => {
            let rest = rest.trim();
            (id.to_string(), (!rest.is_empty()).then(|| rest.to_string()))
        }
        None => (header.to_string(), None),
    }
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: None,
            finished: false,
        }
    }

    /// 读一行到 `self.line`；到达文件尾返回 false
    fn read_line(&mut self) -> Result<bool> {
        self.line.clear();
        let n = self.reader.read_line(&mut self.line).context("failed to read FASTA line")?;
        Ok(n > 0)
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.finished {
            return Ok(None);
        }

        let header = match self.pending.take() {
            Some(h) => h,
            None => loop {
                if !self.read_line()? {
                    self.finished = true;
                    return Ok(None);
                }
                if let Some(h) = self.line.strip_prefix('>') {
                    break h.to_string();
                }
            },
        };
        let (id, desc) = split_header(&header);

        let mut seq = Vec::new();
        while self.read_line()? {
            if let Some(h) = self.line.strip_prefix('>') {
                self.pending = Some(h.to_string());
                return Ok(Some(FastaRecord { id, desc, seq }));
            }
            seq.extend(
                self.line
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }
        self.finished = true;
        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// 读入整个 FASTA 文件
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let fh = File::open(path).with_context(|| format!("cannot open FASTA '{}'", path.display()))?;
    FastaReader::new(BufReader::new(fh))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("cannot parse FASTA '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_records_in_order() {
        let data = b">seqH tutorial pair\nAAATGACGG\nATTG\n>seqV\nagtcggatctactg\n";
        let records: Vec<FastaRecord> = FastaReader::new(Cursor::new(&data[..])).collect::<Result<_>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seqH");
        assert_eq!(records[0].desc.as_deref(), Some("tutorial pair"));
        assert_eq!(records[0].seq, b"AAATGACGGATTG");
        assert_eq!(records[1].id, "seqV");
        assert_eq!(records[1].desc, None);
        assert_eq!(records[1].seq, b"AGTCGGATCTACTG");
    }

    #[test]
    fn tolerates_crlf_and_leading_noise() {
        let data = b"\r\n; comment\n>a  \r\nAC gt\r\n\r\n>b\r\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));
        let a = r.next_record().unwrap().unwrap();
        assert_eq!((a.id.as_str(), a.seq.as_slice()), ("a", &b"ACGT"[..]));
        let b = r.next_record().unwrap().unwrap();
        assert_eq!(b.id, "b");
        assert!(b.seq.is_empty());
        assert!(r.next_record().unwrap().is_none());
        assert!(r.next().is_none());
    }
}
