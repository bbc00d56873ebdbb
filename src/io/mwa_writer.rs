use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::{super::graph::*, MwaInstance};

pub trait MwaWriter {
    fn try_write_mwa<W: Write>(&self, writer: W) -> Result<(), std::io::Error>;
    fn try_write_mwa_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error>;
}

impl<T> MwaWriter for MwaInstance<T>
where
    T: Weight,
{
    fn try_write_mwa<W: Write>(&self, mut writer: W) -> Result<(), std::io::Error> {
        writeln!(
            writer,
            "p mwa {} {} {}",
            self.graph.number_of_nodes(),
            self.graph.number_of_edges(),
            self.root + 1
        )?;

        for WeightedEdge(u, v, w) in self.graph.edges() {
            writeln!(writer, "{} {} {}", u + 1, v + 1, w)?;
        }

        Ok(())
    }

    fn try_write_mwa_file<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_mwa(&mut writer)?;
        writer.flush()
    }
}
