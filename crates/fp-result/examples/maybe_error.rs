use fp_result::prelude::*;

struct Signup<'a> {
    email: &'a str,
    age: &'a str,
    password: &'a str,
}

fn check_email(email: &str) -> Result<&str> {
    ensure!(email.contains('@'), invalid_argument(format!("'{email}' is not an email")));
    Ok(email)
}

fn check_age(age: &str) -> Result<u8> {
    let age: u8 = age.parse()?;
    ensure!(age >= 18, out_of_range("must be 18+"));
    Ok(age)
}

fn check_password(password: &str) -> Result<()> {
    ensure!(password.len() >= 8, failed_precondition("password shorter than 8"));
    Ok(())
}

fn validate(form: &Signup<'_>) -> Option<Error> {
    let email = check_email(form.email);
    let age = check_age(form.age);
    let password = check_password(form.password);

    maybe_error!(email, age, password)
}

fn main() {
    println!("maybe_error Example");

    let forms = [
        Signup {
            email: "ada@example.com",
            age: "36",
            password: "correct horse",
        },
        Signup {
            email: "ada@example.com",
            age: "12",
            password: "short",
        },
        Signup {
            email: "nobody",
            age: "abc",
            password: "short",
        },
    ];

    for form in &forms {
        match validate(form) {
            None => println!("   {}: valid", form.email),
            Some(error) => println!("   {}: {error}", form.email),
        }
    }
}
