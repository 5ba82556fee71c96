use std::io::{self, BufRead, Write};

/// Ask `question` until the answer starts with `y` or `n` (any case).
/// End of input counts as no.
///
/// # Errors
///
/// Propagates read / write failures on the terminal streams.
pub fn yes_no<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    loop {
        write!(output, "{question} ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim_start().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Y') => return Ok(true),
            Some('N') => return Ok(false),
            _ => writeln!(output, "!!Invalid Input. Please enter some form of 'yes' or 'no'!!\n")?,
        }
    }
}

/// [`yes_no`] on the process's stdin / stderr.
pub fn ask(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    yes_no(&mut input, &mut io::stderr(), question)
}
