use std::error::Error;
use std::fs;
use std::path::Path;

use log::debug;

use crate::level::Level;
use crate::LoadLevel;

impl<P: AsRef<Path>> LoadLevel for P {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let path = self.as_ref();
        debug!("Loading {}", path.display());
        let text = fs::read_to_string(path)?;
        Ok(text.parse()?)
    }
}
