use std::io::{BufRead, Write};
use std::path::Path;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::DEFAULT_DATA_FILE;
use crate::core::library::{LibraryResult, SearchField};

const SEPARATOR_WIDTH: usize = 35;

// LibraryMenu drives a catalog from a line-oriented text menu
pub struct LibraryMenu<R: BufRead, W: Write> {
    catalog: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LibraryMenu<R, W> {
    pub fn new(catalog: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (Box<dyn CatalogService>, W) {
        (self.catalog, self.output)
    }

    // runs the menu until the user exits or input ends
    pub async fn run(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "Welcome to the Library Management System!")?;
        loop {
            self.display_menu()?;
            let choice = match self.prompt("Enter your choice (1-8): ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            if !self.handle_choice(choice.as_str()).await? {
                return Ok(());
            }
            if self.prompt("\nPress Enter for main menu...")?.is_none() {
                return Ok(());
            }
        }
    }

    pub fn display_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n=== LIBRARY MANAGEMENT SYSTEM ===")?;
        writeln!(self.output, "Enter the number of the action you want to perform:")?;
        writeln!(self.output, "1. Add a new book")?;
        writeln!(self.output, "2. Remove a book (by ISBN)")?;
        writeln!(self.output, "3. List all books")?;
        writeln!(self.output, "4. Find books")?;
        writeln!(self.output, "5. Load books from file")?;
        writeln!(self.output, "6. Save books to file")?;
        writeln!(self.output, "7. Search books online")?;
        writeln!(self.output, "8. Exit")?;
        writeln!(self.output, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    // returns false when the user asked to exit
    pub async fn handle_choice(&mut self, choice: &str) -> LibraryResult<bool> {
        match choice.trim() {
            "1" => self.add_book_menu().await?,
            "2" => self.remove_book_menu().await?,
            "3" => self.list_books_menu()?,
            "4" => self.find_books_menu()?,
            "5" => self.load_books_menu().await?,
            "6" => self.save_books_menu().await?,
            "7" => self.search_online_menu().await?,
            "8" => {
                writeln!(self.output, "Thank you for using Library Management System!")?;
                return Ok(false);
            }
            _ => writeln!(self.output, "Invalid choice! Please enter 1-8.")?,
        }
        Ok(true)
    }

    async fn add_book_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n--- Add New Book ---")?;
        let isbn = match self.required("Enter ISBN: ", "ISBN is required!")? {
            Some(isbn) => isbn,
            None => return Ok(()),
        };
        match self.catalog.add_book_by_isbn(isbn.as_str()).await {
            Ok(book) => writeln!(self.output, "Successfully added {}", book)?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    async fn remove_book_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n--- Remove Book ---")?;
        let isbn = match self.required("Enter ISBN of book to remove: ", "ISBN is required!")? {
            Some(isbn) => isbn,
            None => return Ok(()),
        };
        let title = self.catalog.find_books(isbn.as_str(), SearchField::Isbn)
            .first().map(|b| b.title.clone());
        match (self.catalog.remove_book(isbn.as_str()).await, title) {
            (true, Some(title)) => writeln!(self.output, "Removed {} from the library", title)?,
            (true, None) => writeln!(self.output, "Removed {} from the library", isbn)?,
            (false, _) => writeln!(self.output, "Book with ISBN {} not found", isbn)?,
        }
        Ok(())
    }

    fn list_books_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\nAll Books in Library:")?;
        if self.catalog.books().is_empty() {
            writeln!(self.output, "No books in library!")?;
            return Ok(());
        }
        for book in self.catalog.books() {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    fn find_books_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n--- Find Books ---")?;
        writeln!(self.output, "Search by:")?;
        writeln!(self.output, "1. Title")?;
        writeln!(self.output, "2. Author")?;
        writeln!(self.output, "3. ISBN")?;
        let field = match self.prompt("Enter choice (1-3): ")?.as_deref() {
            Some("1") => SearchField::Title,
            Some("2") => SearchField::Author,
            Some("3") => SearchField::Isbn,
            _ => {
                writeln!(self.output, "Invalid choice!")?;
                return Ok(());
            }
        };
        let query = match self.required("Enter search term: ", "Search term is required!")? {
            Some(query) => query,
            None => return Ok(()),
        };
        let results = self.catalog.find_books(query.as_str(), field);
        self.print_results(&results, "No books found!")
    }

    async fn load_books_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n--- Load Books from File ---")?;
        let file_path = self.file_path()?;
        match self.catalog.load_from(Path::new(file_path.as_str())).await {
            Ok(added) => writeln!(self.output, "Loaded {} book(s) from {}", added, file_path)?,
            Err(err) => writeln!(self.output, "Error loading: {}", err)?,
        }
        Ok(())
    }

    async fn save_books_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n--- Save Books to File ---")?;
        let file_path = self.file_path()?;
        match self.catalog.save_to(Path::new(file_path.as_str())).await {
            Ok(()) => writeln!(self.output, "Successfully saved {} books to {}", self.catalog.books().len(), file_path)?,
            Err(err) => writeln!(self.output, "Error saving: {}", err)?,
        }
        Ok(())
    }

    async fn search_online_menu(&mut self) -> LibraryResult<()> {
        writeln!(self.output, "\n--- Search Books Online ---")?;
        let query = match self.required("Enter search term: ", "Search term is required!")? {
            Some(query) => query,
            None => return Ok(()),
        };
        let results = self.catalog.search_online(query.as_str()).await;
        self.print_results(&results, "No books found online!")
    }

    fn print_results(&mut self, results: &[BookDto], empty_message: &str) -> LibraryResult<()> {
        if results.is_empty() {
            writeln!(self.output, "{}", empty_message)?;
            return Ok(());
        }
        writeln!(self.output, "\nFound {} book(s):", results.len())?;
        for book in results {
            writeln!(self.output, "  - {}", book)?;
        }
        Ok(())
    }

    fn file_path(&mut self) -> LibraryResult<String> {
        let msg = format!("Enter file path (default: {}): ", DEFAULT_DATA_FILE);
        Ok(self.prompt(msg.as_str())?
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()))
    }

    // prompts for a value that must not be blank; None means it was missing
    fn required(&mut self, msg: &str, missing: &str) -> LibraryResult<Option<String>> {
        match self.prompt(msg)? {
            Some(value) if !value.is_empty() => Ok(Some(value)),
            _ => {
                writeln!(self.output, "{}", missing)?;
                Ok(None)
            }
        }
    }

    // None once input is exhausted
    fn prompt(&mut self, msg: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
