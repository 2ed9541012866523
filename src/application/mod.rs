pub mod department_service;
