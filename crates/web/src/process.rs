//! The seam between option post-processors and the hosting page.
//!
//! A post-processor mutates an [Options] tree before it is encoded and may
//! emit page-level artifacts (scripts, script references) through a
//! [PageHeader]. The hosting web framework decides how header items actually
//! reach the page; [ScriptBuffer] is the in-memory implementation used by
//! hosts without a header pipeline and by tests.
//!
//! [Options]: chartson_options::options::Options

use chartson_options::options::Options;

use crate::error::Result;

/// A post-processor run over an options tree before it is encoded.
pub trait OptionsProcessor {
    /// Mutates the options tree and emits any page-level artifacts.
    fn process(
        &mut self,
        options: &mut Options,
        context: &mut ProcessorContext,
        header: &mut dyn PageHeader,
    ) -> Result<()>;
}

/// Side-channel state shared by the processors of one chart render.
#[derive(Debug, Default)]
pub struct ProcessorContext {
    /// The drilldown sub-configurations collected out of the tree, in the
    /// order their points were encountered.
    pub drilldown_options: Vec<Options>,
}

impl ProcessorContext {
    pub fn new() -> ProcessorContext {
        ProcessorContext::default()
    }
}

/// The header of the hosting page, as far as processors are concerned.
pub trait PageHeader {
    /// Contributes an identified script, rendered at most once per page.
    fn script(&mut self, id: &str, source: &str) -> Result<()>;

    /// Contributes a script executed once the document is ready.
    fn dom_ready(&mut self, source: &str) -> Result<()>;

    /// Contributes a reference to a static script resource.
    fn reference(&mut self, name: &str) -> Result<()>;
}

/// A [PageHeader] that collects items in memory.
#[derive(Debug, Default)]
pub struct ScriptBuffer {
    pub scripts: Vec<(String, String)>,
    pub dom_ready: Vec<String>,
    pub references: Vec<String>,
}

impl ScriptBuffer {
    pub fn new() -> ScriptBuffer {
        ScriptBuffer::default()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.dom_ready.is_empty() && self.references.is_empty()
    }
}

impl PageHeader for ScriptBuffer {
    fn script(&mut self, id: &str, source: &str) -> Result<()> {
        self.scripts.push((String::from(id), String::from(source)));
        Ok(())
    }

    fn dom_ready(&mut self, source: &str) -> Result<()> {
        self.dom_ready.push(String::from(source));
        Ok(())
    }

    fn reference(&mut self, name: &str) -> Result<()> {
        self.references.push(String::from(name));
        Ok(())
    }
}
