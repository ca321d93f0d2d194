//! Interactive chat demo
//!
//! Talks to the lab assistant from the terminal. Needs a real API key:
//!
//! `GEMINI_API_KEY=... cargo run -p dhtlab-assistant --example chat`

use std::io::{self, BufRead, Write};

use dhtlab_assistant::{AssistantConfig, ChatSession, GeminiClient, WELCOME_MESSAGE};

#[tokio::main]
async fn main() {
    let config = AssistantConfig::from_env();
    let client = match GeminiClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut session = ChatSession::new(Box::new(client));

    println!("assistente> {WELCOME_MESSAGE}");
    println!("(linha vazia para sair)\n");

    let stdin = io::stdin();
    loop {
        print!("você> ");
        io::stdout().flush().expect("flush stdout");

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("read stdin") == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        let reply = session.send(question).await;
        println!("assistente> {reply}\n");
    }
}
