#![forbid(unsafe_code)]
//! Command-line front-end for `vaultfile`.
//!
//! A thin layer over the library: collects the password, derives the key
//! once, and calls the blocking operations. The binary owns the
//! `.enc`/`.encdir` naming convention and the overwrite policy; it contains
//! no crypto logic of its own.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;
use vaultfile::{
    DIR_SUFFIX, checksum_file, decrypt_directory, decrypt_file, derive_key, encrypt_directory,
    encrypt_file, to_hex_lower,
};

#[derive(Parser, Debug)]
#[command(
    name = "vaultfile",
    version,
    about = "Password-protect files and directory trees as single containers"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a file or a directory tree into a container
    Enc(EncArgs),
    /// Decrypt a container back into a file or a directory tree
    Dec(DecArgs),
    /// Print the SHA-256 checksum of a file
    Hash(HashArgs),
}

#[derive(Args, Debug)]
struct EncArgs {
    /// Input file or directory
    #[arg(short = 'i', long = "in")]
    input: PathBuf,

    /// Output container. If omitted, ".enc" (files) or ".encdir" (directories) is appended.
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// Overwrite output if it exists
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Read password from file instead of interactive prompt
    #[arg(short = 'p', long = "password-file")]
    password_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DecArgs {
    /// Input container
    #[arg(short = 'i', long = "in")]
    input: PathBuf,

    /// Output path. If omitted, the ".enc"/".encdir" suffix is stripped.
    #[arg(short = 'o', long = "out")]
    output: Option<PathBuf>,

    /// Treat the container as a directory archive even without ".encdir"
    #[arg(long)]
    dir: bool,

    /// Overwrite the output file if it already exists
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Read password from file instead of interactive prompt
    #[arg(short = 'p', long = "password-file")]
    password_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct HashArgs {
    /// File to hash
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Enc(a) => cmd_enc(a),
        Command::Dec(a) => cmd_dec(a),
        Command::Hash(a) => cmd_hash(a),
    }
}

fn read_password(password_file: &Option<PathBuf>, prompt: &str) -> Result<SecretString> {
    if let Some(path) = password_file {
        let mut s = String::new();
        fs::File::open(path)?.read_to_string(&mut s)?;

        // Create SecretString directly from the trimmed slice, then wipe the
        // buffer that held the password.
        let secret = SecretString::new(
            s.trim_end_matches(&['\r', '\n'][..])
                .to_owned()
                .into_boxed_str(),
        );

        use zeroize::Zeroize;
        s.zeroize();
        Ok(secret)
    } else {
        let pw = rpassword::prompt_password(prompt)?;
        Ok(SecretString::new(pw.into_boxed_str()))
    }
}

fn cmd_enc(a: EncArgs) -> Result<()> {
    let pw = read_password(&a.password_file, "Password: ")?;
    let key = derive_key(&pw).context("key derivation failed")?;

    let meta = fs::metadata(&a.input)
        .with_context(|| format!("cannot read {}", a.input.display()))?;
    let out = if meta.is_dir() {
        encrypt_directory(&a.input, a.output.as_deref(), &key, a.force)
    } else {
        encrypt_file(&a.input, a.output.as_deref(), &key, a.force)
    }
    .context("encryption failed")?;

    eprintln!("Wrote {}", out.display());
    Ok(())
}

fn cmd_dec(a: DecArgs) -> Result<()> {
    let pw = read_password(&a.password_file, "Password: ")?;
    let key = derive_key(&pw).context("key derivation failed")?;

    let dir_mode = a.dir
        || a.input
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&format!(".{DIR_SUFFIX}")));

    let out = if dir_mode {
        decrypt_directory(&a.input, a.output.as_deref(), &key)
    } else {
        decrypt_file(&a.input, a.output.as_deref(), &key, a.force)
    }
    .context("decryption failed")?;

    eprintln!("Wrote {}", out.display());
    Ok(())
}

fn cmd_hash(a: HashArgs) -> Result<()> {
    let digest = checksum_file(&a.file)
        .with_context(|| format!("cannot hash {}", a.file.display()))?;
    println!("{}", to_hex_lower(&digest));
    Ok(())
}
