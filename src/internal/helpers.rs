use std::io;
use std::io::Write;

pub fn prompt_line(prompt: &str) -> io::Result<String> {
    print!("{prompt} ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Anything but an explicit yes counts as no.
pub fn prompt_yes_no(prompt: &str) -> io::Result<bool> {
    let answer = prompt_line(&format!("{prompt} [y/N]"))?;
    Ok(matches!(
        answer.to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
