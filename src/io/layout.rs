/*! On-disk layout of a run.

Every path read or written by a stage is derived here from the [Config], so that
stages only exchange [DocumentPair]s and never build paths themselves.

```text
<preprocessed>/<title>_<lang>.snt               aligner input
<work>/<pair>/<title>_<lang>.snt(.aligned)      aligner work dir
<work>/<pair>_sent_align.log                    aligner log
<source>/snt/<title>_<lang>.snt                 originals (reconciliation)
<original source>/snt/<title>_<lang>.snt        originals (corpus building)
<index>/<pair>/<title>.<lang>.idx               index files
<output>/<corpus title>.<pair>.<lang>           combined corpus
<output>/<corpus title>.unique.<pair>.<lang>    unique corpus
```
!*/
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::lang::{LangPair, Side};

/// A document available in both languages, identified by its title.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct DocumentPair {
    title: String,
}

impl DocumentPair {
    pub fn new(title: String) -> Self {
        Self { title }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Result of listing a directory for document pairs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Documents present in both languages, sorted by title.
    pub pairs: Vec<DocumentPair>,
    /// Titles only present in the source language, sorted.
    pub orphans: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Layout {
    langs: LangPair,
    corpus_title: String,
    preprocessed: PathBuf,
    source: PathBuf,
    original_source: PathBuf,
    work: PathBuf,
    index: PathBuf,
    output: PathBuf,
}

impl Layout {
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            langs: config.lang_pair()?,
            corpus_title: config.corpus_title.clone(),
            preprocessed: config.preprocessed_source_data_directory.clone(),
            source: config.source_data_directory.clone(),
            original_source: config.original_source_data_directory().to_path_buf(),
            work: config.work_directory.clone(),
            index: config.alignment_index_directory.clone(),
            output: config.output_data_directory.clone(),
        })
    }

    pub fn langs(&self) -> &LangPair {
        &self.langs
    }

    fn lang(&self, side: Side) -> &str {
        self.langs.get(side)
    }

    fn snt_name(&self, doc: &DocumentPair, side: Side) -> String {
        format!("{}_{}.snt", doc.title, self.lang(side))
    }

    pub fn preprocessed_path(&self, doc: &DocumentPair, side: Side) -> PathBuf {
        self.preprocessed.join(self.snt_name(doc, side))
    }

    /// Per-pair aligner work directory.
    pub fn work_dir(&self) -> PathBuf {
        self.work.join(self.langs.to_string())
    }

    /// Copy of the aligner input inside the work directory.
    pub fn work_path(&self, doc: &DocumentPair, side: Side) -> PathBuf {
        self.work_dir().join(self.snt_name(doc, side))
    }

    pub fn aligned_path(&self, doc: &DocumentPair, side: Side) -> PathBuf {
        self.work_dir()
            .join(format!("{}.aligned", self.snt_name(doc, side)))
    }

    pub fn aligner_log_path(&self) -> PathBuf {
        self.work.join(format!("{}_sent_align.log", self.langs))
    }

    /// Original file, as read when reconciling aligned lines.
    pub fn original_path(&self, doc: &DocumentPair, side: Side) -> PathBuf {
        self.source.join("snt").join(self.snt_name(doc, side))
    }

    /// Original file, as read when building the corpus.
    pub fn build_original_path(&self, doc: &DocumentPair, side: Side) -> PathBuf {
        self.original_source.join("snt").join(self.snt_name(doc, side))
    }

    /// Per-pair index directory.
    pub fn index_dir(&self) -> PathBuf {
        self.index.join(self.langs.to_string())
    }

    pub fn index_path(&self, doc: &DocumentPair, side: Side) -> PathBuf {
        self.index_dir()
            .join(format!("{}.{}.idx", doc.title, self.lang(side)))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output
    }

    pub fn combined_path(&self, side: Side) -> PathBuf {
        self.output.join(format!(
            "{}.{}.{}",
            self.corpus_title,
            self.langs,
            self.lang(side)
        ))
    }

    pub fn unique_path(&self, side: Side) -> PathBuf {
        self.output.join(format!(
            "{}.unique.{}.{}",
            self.corpus_title,
            self.langs,
            self.lang(side)
        ))
    }

    /// Documents handed to the aligner.
    pub fn discover_preprocessed(&self) -> Result<Discovery, Error> {
        let (src, trg) = self.suffixes(|lang| format!("_{}.snt", lang));
        discover(&self.preprocessed, &src, &trg)
    }

    /// Documents the aligner produced output for.
    pub fn discover_aligned(&self) -> Result<Discovery, Error> {
        let (src, trg) = self.suffixes(|lang| format!("_{}.snt.aligned", lang));
        discover(&self.work_dir(), &src, &trg)
    }

    /// Documents with index files.
    pub fn discover_indexed(&self) -> Result<Discovery, Error> {
        let (src, trg) = self.suffixes(|lang| format!(".{}.idx", lang));
        discover(&self.index_dir(), &src, &trg)
    }

    fn suffixes(&self, f: impl Fn(&str) -> String) -> (String, String) {
        (f(self.langs.source()), f(self.langs.target()))
    }
}

/// List the files of `dir` ending with `src_suffix`, and pair them with
/// their `trg_suffix` counterpart.
///
/// Titles are sorted so that output order does not depend on the file system.
/// A missing `dir` is an error: it usually means a misconfigured run.
fn discover(dir: &Path, src_suffix: &str, trg_suffix: &str) -> Result<Discovery, Error> {
    if !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input directory {:?} does not exist", dir),
        )));
    }
    let dir_str = dir
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid directory: {:?}", dir)))?;
    let pattern = format!("{}/*{}", glob::Pattern::escape(dir_str), src_suffix);
    debug!("discovering documents with {}", pattern);

    let mut titles = BTreeSet::new();
    for path in glob::glob(&pattern)? {
        let path = path?;
        if !path.is_file() {
            continue;
        }
        let title = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(src_suffix));
        match title {
            Some(title) if !title.is_empty() => {
                titles.insert(title.to_string());
            }
            _ => debug!("ignoring {:?}", path),
        }
    }

    let mut discovery = Discovery::default();
    for title in titles {
        if dir.join(format!("{}{}", title, trg_suffix)).is_file() {
            discovery.pairs.push(DocumentPair::new(title));
        } else {
            discovery.orphans.push(title);
        }
    }
    Ok(discovery)
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    fn config(root: &Path) -> Config {
        format!(
            r#"
source_language = "en"
target_language = "fr"
corpus_title = "europarl"
preprocessed_source_data_directory = '{root}/pre'
source_data_directory = '{root}/data'
work_directory = '{root}/work'
alignment_index_directory = '{root}/idx'
output_data_directory = '{root}/out'
"#,
            root = root.display()
        )
        .parse()
        .unwrap()
    }

    #[test]
    fn paths() {
        let root = Path::new("root");
        let layout = Layout::new(&config(root)).unwrap();
        let doc = DocumentPair::new("doc1".to_string());

        assert_eq!(
            layout.preprocessed_path(&doc, Side::Source),
            root.join("pre/doc1_en.snt")
        );
        assert_eq!(
            layout.work_path(&doc, Side::Target),
            root.join("work/en-fr/doc1_fr.snt")
        );
        assert_eq!(
            layout.aligned_path(&doc, Side::Source),
            root.join("work/en-fr/doc1_en.snt.aligned")
        );
        assert_eq!(
            layout.aligner_log_path(),
            root.join("work/en-fr_sent_align.log")
        );
        assert_eq!(
            layout.original_path(&doc, Side::Target),
            root.join("data/snt/doc1_fr.snt")
        );
        assert_eq!(
            layout.build_original_path(&doc, Side::Target),
            root.join("data/snt/doc1_fr.snt")
        );
        assert_eq!(
            layout.index_path(&doc, Side::Target),
            root.join("idx/en-fr/doc1.fr.idx")
        );
        assert_eq!(
            layout.combined_path(Side::Source),
            root.join("out/europarl.en-fr.en")
        );
        assert_eq!(
            layout.unique_path(Side::Target),
            root.join("out/europarl.unique.en-fr.fr")
        );
    }

    #[test]
    fn discovery_is_sorted_and_paired() {
        let root = tempfile::tempdir().unwrap();
        let layout = Layout::new(&config(root.path())).unwrap();
        let idx = layout.index_dir();
        std::fs::create_dir_all(&idx).unwrap();

        for name in [
            "zeta.en.idx",
            "zeta.fr.idx",
            "alpha.en.idx",
            "alpha.fr.idx",
            "mid.en.idx",
            "lonely.fr.idx",
            "notes.txt",
        ] {
            File::create(idx.join(name)).unwrap();
        }

        let discovery = layout.discover_indexed().unwrap();
        let titles: Vec<&str> = discovery.pairs.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["alpha", "zeta"]);
        assert_eq!(discovery.orphans, vec!["mid".to_string()]);
    }

    #[test]
    fn discovery_titles_with_separators() {
        let root = tempfile::tempdir().unwrap();
        let layout = Layout::new(&config(root.path())).unwrap();
        let work = layout.work_dir();
        std::fs::create_dir_all(&work).unwrap();

        for name in [
            "some_doc.v2_en.snt.aligned",
            "some_doc.v2_fr.snt.aligned",
            "some_doc.v2_en.snt",
        ] {
            File::create(work.join(name)).unwrap();
        }

        let discovery = layout.discover_aligned().unwrap();
        assert_eq!(
            discovery.pairs,
            vec![DocumentPair::new("some_doc.v2".to_string())]
        );
    }

    #[test]
    fn discovery_missing_dir() {
        let root = tempfile::tempdir().unwrap();
        let layout = Layout::new(&config(root.path())).unwrap();
        let res = layout.discover_preprocessed();
        assert!(matches!(res, Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound));
        assert!(layout.discover_indexed().is_err());

        std::fs::create_dir_all(layout.index_dir()).unwrap();
        assert_eq!(layout.discover_indexed().unwrap(), Discovery::default());
    }
}
