//! Prompt construction for the `/generate` endpoint.

/// Instruction used when the caller's mode is not one of the known ones.
pub const DEFAULT_INSTRUCTION: &str = "Give code with explanation.";

/// Caller-selected explanation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Brief,
    Detail,
    Pro,
}

impl Mode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "brief" => Some(Self::Brief),
            "detail" => Some(Self::Detail),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Self::Brief => "Give only the code and a short, concise explanation.",
            Self::Detail => "Give the code with a detailed step-by-step explanation.",
            Self::Pro => "First step:- explain the question what to do Second step:- explain bruteforce approach and then give it code and explain it Third step:- explain its optimization approach and then write it code forth step:- expain all the expected question dobts",
        }
    }
}

/// Looks up the instruction for a mode name. Unknown modes are accepted and
/// get [`DEFAULT_INSTRUCTION`].
pub fn instruction_for(mode: &str) -> &'static str {
    match Mode::from_name(mode) {
        Some(mode) => mode.instruction(),
        None => {
            tracing::debug!(mode, "unrecognized mode, using default instruction");
            DEFAULT_INSTRUCTION
        }
    }
}

/// Renders the full prompt. The problem text is embedded verbatim.
pub fn render(language: &str, problem: &str, mode: &str) -> String {
    let instruction = instruction_for(mode);
    format!(
        "Solve this DSA problem in {language}.\n\nProblem: {problem}\n\nInstructions: {instruction}\n"
    )
}
