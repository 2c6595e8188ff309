use std::sync::{Arc, Mutex};
use std::{fs::File, io::Read};

use slog::{o, Drain, Level, Logger, Never, OwnedKVList, Record};

pub fn file_to_packet(fname: &str) -> Vec<u8> {
    // The test is executed under the crate root directory.
    let mut program_path = std::env::current_dir().unwrap();
    program_path.push("tests");
    program_path.push("packet_examples");
    program_path.push(fname);

    let mut file = File::open(program_path).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    let content = content.trim();

    (0..content.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&content[i..i + 2], 16).unwrap())
        .collect()
}

/// `headroom` zero bytes followed by `payload`.
#[allow(dead_code)]
pub fn with_headroom(headroom: usize, payload: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0; headroom];
    bytes.extend_from_slice(payload);
    bytes
}

/// A drain that keeps every record it sees.
#[derive(Clone, Default)]
pub struct RecordingDrain {
    records: Arc<Mutex<Vec<(Level, String)>>>,
}

#[allow(dead_code)]
impl RecordingDrain {
    pub fn logger(&self) -> Logger {
        Logger::root(self.clone().fuse(), o!())
    }

    pub fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl Drain for RecordingDrain {
    type Ok = ();
    type Err = Never;

    fn log(&self, record: &Record<'_>, _values: &OwnedKVList) -> Result<(), Never> {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.msg().to_string()));
        Ok(())
    }
}
