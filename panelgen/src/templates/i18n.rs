//! Localization templates

/// i18next setup with text direction switching
pub const I18N_CONFIG: &str = r#"import i18n from "i18next";
import { initReactI18next } from "react-i18next";
import LanguageDetector from "i18next-browser-languagedetector";
{{#each languages}}
import {{ident}}Translation from "./locales/{{code}}/translation.json";
{{/each}}

const resources = {
{{#each languages}}
  "{{code}}": { translation: {{ident}}Translation },
{{/each}}
};

const rtlLanguages: string[] = {{json rtl_languages}};

const applyDirection = (lng: string) => {
  if (typeof document === "undefined") return;
  document.documentElement.dir = rtlLanguages.includes(lng) ? "rtl" : "ltr";
  document.documentElement.lang = lng;
};

i18n
  .use(LanguageDetector)
  .use(initReactI18next)
  .init({
    resources,
    fallbackLng: "{{default_language}}",
    debug: import.meta.env.DEV,
    interpolation: {
      // React escapes already
      escapeValue: false,
    },
  });

i18n.on("languageChanged", applyDirection);
applyDirection(i18n.language || "{{default_language}}");

export default i18n;
"#;

/// Language dropdown
pub const LANGUAGE_SWITCHER: &str = r#"import { useTranslation } from "react-i18next";
import { Languages } from "lucide-react";
import { Button } from "@/components/ui/button";
import {
  DropdownMenu,
  DropdownMenuContent,
  DropdownMenuItem,
  DropdownMenuTrigger,
} from "@/components/ui/dropdown-menu";

const languages: { code: string; name: string }[] = [
{{#each languages}}
  { code: "{{code}}", name: "{{name}}" },
{{/each}}
];

export function LanguageSwitcher() {
  const { i18n } = useTranslation();

  return (
    <DropdownMenu>
      <DropdownMenuTrigger asChild>
        <Button variant="outline" size="icon">
          <Languages className="h-[1.2rem] w-[1.2rem]" />
          <span className="sr-only">Change language</span>
        </Button>
      </DropdownMenuTrigger>
      <DropdownMenuContent align="end">
        {languages.map((lang) => (
          <DropdownMenuItem
            key={lang.code}
            onClick={() => i18n.changeLanguage(lang.code)}
            disabled={i18n.resolvedLanguage === lang.code}
          >
            {lang.name}
          </DropdownMenuItem>
        ))}
      </DropdownMenuContent>
    </DropdownMenu>
  );
}
"#;

/// Translation resources for one language
pub const TRANSLATION: &str = "{{json translations}}\n";
