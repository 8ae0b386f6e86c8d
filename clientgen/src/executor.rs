use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use log::{debug, info};

use crate::generator::Generator;
use crate::input::Input;
use crate::model::Config;
use crate::output::Output;

type OutputPtr = Rc<RefCell<dyn Output>>;

/// Runs a full generation: reads every input, generates each file once and writes it to every
/// output.
pub struct Executor {
    generator: Generator,
    inputs: Vec<Box<dyn Input>>,
    outputs: Vec<OutputPtr>,
}

impl Executor {
    pub fn new(config: Config) -> Self {
        Self {
            generator: Generator::new(config),
            inputs: vec![],
            outputs: vec![],
        }
    }

    /// Add a source of endpoints. Endpoints from all inputs are generated together, in the order
    /// the inputs were added.
    pub fn input(mut self, input: impl Input + 'static) -> Self {
        self.inputs.push(Box::new(input));
        self
    }

    /// Add an output.
    ///
    /// This method takes complete ownership of the output. If you want access to the output after
    /// execution, use [Executor::output_ptr].
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Rc::new(RefCell::new(output)));
        self
    }

    /// Add an output that stays accessible after [Executor::execute].
    ///
    /// The output is only borrowed mutably during [Executor::execute].
    pub fn output_ptr(mut self, output: OutputPtr) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    pub fn execute(self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(anyhow!("no 'inputs' have been specified"));
        }
        if self.outputs.is_empty() {
            return Err(anyhow!("no 'outputs' have been specified"));
        }

        info!("Reading endpoints...");
        let sources = self.inputs.iter().map(Box::as_ref).collect::<Vec<&dyn Input>>();
        let files = self.generator.generate_each(&sources)?;

        for file in files {
            let file = file?;
            for output in &self.outputs {
                let mut output = output.borrow_mut();
                info!("Writing '{}' to output '{:?}'...", file.file_name, output);
                output.begin_file(&file.file_name)?;
                output.write_str(&file.contents)?;
            }
            debug!("{} bytes in '{}'", file.contents.len(), file.file_name);
        }
        Ok(())
    }
}
