// LaTeX export: document generation from resume data, and the client for the
// external compiler that turns it into a PDF.

pub mod compiler;
pub mod generator;

pub use compiler::{CompileError, LatexCompilerClient, PdfCompiler};
pub use generator::generate_latex;
