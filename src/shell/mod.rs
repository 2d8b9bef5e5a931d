// Interactive Console Shell
// Prompts for a message, prime bit length, and public exponent, runs one
// key-generation/encryption round, and prints every intermediate value.
// Owns no cryptographic state between rounds: all key material is derived
// fresh each iteration and dropped when the round ends.

use std::io::{self, BufRead, StdinLock};
use std::time::Instant;

use anyhow::{Context, Result};
use num_bigint::BigUint;

use crate::rsa::{decrypt, encrypt, generate_round, RsaError};

// ANSI color codes, one per printed field
const BLACK: &str = "\u{1b}[30m";
const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const YELLOW: &str = "\u{1b}[33m";
const BLUE: &str = "\u{1b}[34m";
const MAGENTA: &str = "\u{1b}[35m";
const CYAN: &str = "\u{1b}[36m";
const WHITE: &str = "\u{1b}[37m";
const RESET: &str = "\u{1b}[0m";

type Lines = io::Lines<StdinLock<'static>>;

fn print_colored(message: &str, color: &str) {
    println!("{}{}{}", color, message, RESET);
}

fn prompt_line(lines: &mut Lines, prompt: &str) -> Result<String> {
    print_colored(prompt, BLACK);
    let line = lines.next().context("stdin closed")??;
    Ok(line)
}

fn prompt_bit_length(lines: &mut Lines) -> Result<u32> {
    loop {
        let line = prompt_line(lines, "Please enter the bit length for the primes:")?;
        match line.trim().parse::<u32>() {
            Ok(bits) if bits >= 2 => return Ok(bits),
            Ok(_) => print_colored("Bit length must be at least 2.", RED),
            Err(_) => print_colored("Please enter a whole number.", RED),
        }
    }
}

fn prompt_exponent(lines: &mut Lines) -> Result<BigUint> {
    loop {
        let line = prompt_line(lines, "Please enter the exponent:")?;
        match line.trim().parse::<BigUint>() {
            Ok(e) => return Ok(e),
            Err(_) => print_colored("Please enter a nonnegative integer.", RED),
        }
    }
}

/// Run the interactive loop until the operator declines another round
pub fn run() -> Result<()> {
    let mut lines = io::stdin().lock().lines();

    loop {
        print_colored("Welcome to the Encryption Program!", BLACK);
        let message = prompt_line(&mut lines, "Please enter a message to encrypt:")?;
        let bit_length = prompt_bit_length(&mut lines)?;
        let exponent = prompt_exponent(&mut lines)?;

        let start = Instant::now();

        let material = match generate_round(bit_length, exponent) {
            Ok(material) => material,
            Err(RsaError::InvalidExponent) => {
                print_colored(
                    "Error: e is not coprime with phi. Choose a different exponent.",
                    RED,
                );
                continue;
            }
            Err(e) => {
                print_colored(&format!("Error: {}", e), RED);
                continue;
            }
        };

        print_colored(&format!("p: {}", material.p), RED);
        print_colored(&format!("q: {}", material.q), GREEN);
        print_colored(&format!("n: {}", material.n), YELLOW);
        print_colored(&format!("phi: {}", material.phi), BLUE);
        print_colored(&format!("e: is the public exponent {}", material.e), MAGENTA);
        print_colored(&format!("d: is the private key {}", material.d), CYAN);

        print_colored(&format!("Message: {}", message), BLACK);
        let ciphertext = match encrypt(message.as_bytes(), &material.e, &material.n) {
            Ok(ciphertext) => ciphertext,
            Err(e) => {
                print_colored(&format!("Error: {}", e), RED);
                continue;
            }
        };
        print_colored(
            &format!("Encrypted message as integer: {}", ciphertext),
            RED,
        );
        print_colored(
            &format!("Encrypted message as hex: {}", hex::encode(ciphertext.to_bytes_be())),
            GREEN,
        );

        let decrypted = decrypt(&ciphertext, &material.d, &material.n);
        print_colored(
            &format!("Decrypted message: {}", String::from_utf8_lossy(&decrypted)),
            GREEN,
        );

        print_colored(
            &format!("Time elapsed: {}ms", start.elapsed().as_millis()),
            WHITE,
        );

        let answer = prompt_line(
            &mut lines,
            "Do you want to encrypt another message? (y/n)",
        )?;
        if answer.trim().eq_ignore_ascii_case("n") {
            break;
        }
    }

    print_colored("Thank you for using the Encryption Program!", BLACK);
    Ok(())
}
