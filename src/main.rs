use std::{env, fs::read_to_string, path::PathBuf, rc::Rc, time::Instant};

use ilc::{
    codegen::codegen::{generate, render},
    display_error,
    lexer::lexer::tokenize,
    parser::{expr::parse_expression, parser::Parser},
    scope::scope::{FunctionScope, MethodTable},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains('/') {
        file_path.split('/').last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let tokens = tokenize(file_contents, Some(String::from(file_name)));

    let tokens = match tokens {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(error, PathBuf::from(file_path));
            panic!()
        }
    };

    eprintln!("Tokenized in {:?}", start.elapsed());

    let compile_start = Instant::now();
    let mut parser =
        Parser::new(tokens, Rc::new(String::from(file_name))).with_method_table(MethodTable::new());
    let mut scope = FunctionScope::new();

    // Expressions are parsed back to back against one scope, so every
    // declaration stays visible to the expressions after it
    let mut il = String::new();
    while parser.has_tokens() {
        let expression = match parse_expression(&mut parser, &mut scope) {
            Ok(expression) => expression,
            Err(error) => {
                display_error(error, PathBuf::from(file_path));
                panic!()
            }
        };

        let instructions = match generate(&expression) {
            Ok(instructions) => instructions,
            Err(error) => {
                display_error(error, PathBuf::from(file_path));
                panic!()
            }
        };

        il.push_str(&render(&instructions));
    }

    eprintln!("Compiled in {:?}", compile_start.elapsed());
    eprintln!("Total time: {:?}", start.elapsed());

    print!("{}", il);
}
