use super::*;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Append-only trace of one game, one JSON record per line.
///
/// There is exactly one writer. Every record is flushed before
/// [`Journal::append`] returns, so a crash loses at most the record being
/// written.
pub struct Journal<W>
where
    W: Write,
{
    sink: W,
    path: Option<PathBuf>,
    count: usize,
}

impl<W> Journal<W>
where
    W: Write,
{
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            path: None,
            count: 0,
        }
    }
    pub fn append(&mut self, event: &Event) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.sink, event)?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()?;
        self.count += 1;
        log::trace!("[journal] #{} {}", self.count, event.label());
        Ok(())
    }
    /// Records written so far.
    pub fn len(&self) -> usize {
        self.count
    }
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl Journal<File> {
    /// Start a fresh journal at `<dir>/<unix-secs>.jsonl`. Never
    /// overwrites an existing run: a name already taken gets a `-<n>`
    /// suffix, so runs started in the same second land side by side.
    pub fn create<P>(dir: P) -> std::io::Result<Self>
    where
        P: AsRef<Path>,
    {
        std::fs::create_dir_all(dir.as_ref())?;
        let stamp = crate::timestamp();
        let mut attempt = 0usize;
        loop {
            let name = match attempt {
                0 => format!("{}.jsonl", stamp),
                n => format!("{}-{}.jsonl", stamp, n),
            };
            let path = dir.as_ref().join(name);
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
            {
                Ok(file) => {
                    log::info!("[journal] writing {}", path.display());
                    return Ok(Self {
                        sink: file,
                        path: Some(path),
                        count: 0,
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e),
            }
        }
    }

    /// Parse a journal back into its events, in order.
    pub fn read<P>(path: P) -> std::io::Result<Vec<Event>>
    where
        P: AsRef<Path>,
    {
        parse(BufReader::new(File::open(path)?))
    }
}

impl Journal<Vec<u8>> {
    /// In-memory journal for tests and embedding.
    pub fn memory() -> Self {
        Self::new(Vec::new())
    }
    pub fn events(&self) -> std::io::Result<Vec<Event>> {
        parse(self.sink.as_slice())
    }
}

fn parse<R>(reader: R) -> std::io::Result<Vec<Event>>
where
    R: BufRead,
{
    reader
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .map(|line| Ok(serde_json::from_str::<Event>(&line?)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Street;

    fn showdown(hand: usize) -> Event {
        Event::Showdown {
            hand,
            winners: vec!["alice".into()],
        }
    }

    #[test]
    fn one_record_per_line() {
        let mut journal = Journal::memory();
        journal.append(&showdown(1)).unwrap();
        journal
            .append(&Event::GameEnd {
                hands: 1,
                winner: "alice".into(),
            })
            .unwrap();
        assert_eq!(journal.len(), 2);
        let text = String::from_utf8(journal.into_inner()).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| serde_json::from_str::<serde_json::Value>(l).is_ok()));
        assert!(lines[0].starts_with(r#"{"event":"showdown""#));
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let events = vec![
            showdown(1),
            Event::DecisionFailure {
                hand: 2,
                round: Street::Turn,
                player: "bob".into(),
                kind: crate::decision::FailureKind::Timeout,
                detail: "no decision within 30s".into(),
            },
        ];
        let mut journal = Journal::create(dir.path()).unwrap();
        for event in &events {
            journal.append(event).unwrap();
        }
        let path = journal.path().unwrap().to_path_buf();
        assert_eq!(path.extension().unwrap(), "jsonl");
        drop(journal);
        assert_eq!(Journal::read(&path).unwrap(), events);
    }

    #[test]
    fn same_second_runs_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let mut first = Journal::create(dir.path()).unwrap();
        let mut second = Journal::create(dir.path()).unwrap();
        let mut third = Journal::create(dir.path()).unwrap();
        first.append(&showdown(1)).unwrap();
        second.append(&showdown(2)).unwrap();
        third.append(&showdown(3)).unwrap();
        let paths = [first.path(), second.path(), third.path()]
            .map(|p| p.unwrap().to_path_buf());
        assert_ne!(paths[0], paths[1]);
        assert_ne!(paths[1], paths[2]);
        assert_ne!(paths[0], paths[2]);
        drop((first, second, third));
        assert_eq!(Journal::read(&paths[0]).unwrap(), vec![showdown(1)]);
        assert_eq!(Journal::read(&paths[1]).unwrap(), vec![showdown(2)]);
        assert_eq!(Journal::read(&paths[2]).unwrap(), vec![showdown(3)]);
    }

    #[test]
    fn garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        std::fs::write(&path, "{\"event\":\"showdown\"}\n").unwrap();
        assert!(Journal::read(&path).is_err());
    }
}
